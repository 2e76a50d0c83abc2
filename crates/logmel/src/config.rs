//! Filterbank configuration
//!
//! Plain parameter struct, validated once when a [`LogMel`](crate::LogMel) is
//! built.

use crate::error::LogMelError;
use crate::mel::MelScale;

/// Smallest supported band count
pub const MIN_BANDS: usize = 1;

/// Largest supported band count
pub const MAX_BANDS: usize = 40;

/// Smallest supported FFT size
pub const MIN_FFT_SIZE: usize = 64;

/// Largest supported FFT size
pub const MAX_FFT_SIZE: usize = 4096;

/// Per-band gain applied to the triangular filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterNormalization {
    /// Every triangle peaks at 1
    #[default]
    Unit,
    /// Every triangle has unit area in Hz: gain `2 / (f_hi - f_lo)`
    Area,
}

/// Log-mel front end parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogMelParams {
    /// Sampling frequency in Hz
    pub sample_rate: u32,
    /// FFT length; the spectrum holds `fft_size / 2 + 1` bins
    pub fft_size: usize,
    /// Lower band edge in Q8 Hz (Hz·256)
    pub low_freq_q8: u32,
    /// Upper band edge in Q8 Hz (Hz·256)
    pub upp_freq_q8: u32,
    /// Number of mel bands (1 to 40)
    pub band_num: usize,
    /// Mel mapping used to place the corner frequencies
    pub mel_scale: MelScale,
    /// Per-band filter gain
    pub normalization: FilterNormalization,
    /// Output `log10` instead of the natural log
    pub base10: bool,
}

impl Default for LogMelParams {
    fn default() -> Self {
        Self {
            sample_rate: 16_000,
            fft_size: 512,
            low_freq_q8: 0,
            upp_freq_q8: 8000 * 256,
            band_num: 23,
            mel_scale: MelScale::Htk,
            normalization: FilterNormalization::Unit,
            base10: false,
        }
    }
}

impl LogMelParams {
    /// Number of spectrum bins a matching `process` call expects.
    pub fn spectrum_len(&self) -> usize {
        self.fft_size / 2 + 1
    }

    /// Check every parameter against its supported range.
    ///
    /// Does not check that the frequency range covers at least one FFT bin;
    /// that needs the derived geometry and is reported by
    /// [`LogMel::new`](crate::LogMel::new).
    pub fn validate(&self) -> Result<(), LogMelError> {
        if !(MIN_BANDS..=MAX_BANDS).contains(&self.band_num) {
            return Err(LogMelError::InvalidBandCount {
                band_num: self.band_num,
            });
        }
        if !self.fft_size.is_power_of_two() || !(MIN_FFT_SIZE..=MAX_FFT_SIZE).contains(&self.fft_size)
        {
            return Err(LogMelError::InvalidFftSize {
                fft_size: self.fft_size,
            });
        }
        if self.sample_rate == 0 {
            return Err(LogMelError::InvalidSampleRate {
                sample_rate: self.sample_rate,
            });
        }
        // Nyquist in Q8 Hz is sample_rate * 128
        let nyquist_q8 = self.sample_rate as u64 * 128;
        if self.low_freq_q8 >= self.upp_freq_q8 || self.upp_freq_q8 as u64 > nyquist_q8 {
            return Err(LogMelError::InvalidFrequencyRange {
                low_freq_q8: self.low_freq_q8,
                upp_freq_q8: self.upp_freq_q8,
            });
        }
        Ok(())
    }
}
