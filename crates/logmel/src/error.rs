//! Errors returned by filterbank construction and processing.
//!
//! # Error Codes
//!
//! Every error carries a stable code for programmatic handling:
//!
//! | Code | Description |
//! |------|-------------|
//! | E001 | Band count outside 1..=40 |
//! | E002 | FFT size not a power of two in 64..=4096 |
//! | E003 | Sample rate is zero |
//! | E004 | Frequency range empty, inverted or above Nyquist |
//! | E005 | Scratch buffer smaller than the required size |
//! | E006 | Spectrum length differs from fft_size / 2 + 1 |
//! | E007 | Output length differs from the band count |

use core::fmt;

/// Error codes for construction and processing failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: band count outside 1..=40
    InvalidBandCount,
    /// E002: FFT size not a power of two in 64..=4096
    InvalidFftSize,
    /// E003: sample rate is zero
    InvalidSampleRate,
    /// E004: frequency range empty, inverted or above Nyquist
    InvalidFrequencyRange,
    /// E005: scratch buffer too small
    ScratchTooSmall,
    /// E006: spectrum length mismatch
    SpectrumLengthMismatch,
    /// E007: output length mismatch
    OutputLengthMismatch,
}

impl ErrorCode {
    /// Get the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidBandCount => "E001",
            Self::InvalidFftSize => "E002",
            Self::InvalidSampleRate => "E003",
            Self::InvalidFrequencyRange => "E004",
            Self::ScratchTooSmall => "E005",
            Self::SpectrumLengthMismatch => "E006",
            Self::OutputLengthMismatch => "E007",
        }
    }

    /// Get guidance on how to fix this error.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::InvalidBandCount => "Set band_num between 1 and 40 (23 is typical for 16 kHz speech).",
            Self::InvalidFftSize => {
                "Set fft_size to a power of two between 64 and 4096 (512 is typical at 16 kHz)."
            }
            Self::InvalidSampleRate => "Set sample_rate to the input sampling frequency in Hz.",
            Self::InvalidFrequencyRange => {
                "Band edges are Q8 Hz (Hz * 256): low_freq_q8 must be below upp_freq_q8, upp_freq_q8 \
                 must not exceed sample_rate * 128, and the range must cover at least one FFT bin."
            }
            Self::ScratchTooSmall => "Allocate at least LogMel::scratch_size() bytes of scratch.",
            Self::SpectrumLengthMismatch => {
                "Pass exactly fft_size / 2 + 1 complex bins (positive frequencies including Nyquist)."
            }
            Self::OutputLengthMismatch => "Pass an output slice with exactly band_num elements.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error type for construction and processing failures.
///
/// All checks run before any computation, so a failed call never writes to
/// the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMelError {
    /// Band count outside 1..=40
    InvalidBandCount {
        /// Requested band count
        band_num: usize,
    },
    /// FFT size not a power of two in 64..=4096
    InvalidFftSize {
        /// Requested FFT size
        fft_size: usize,
    },
    /// Sample rate is zero
    InvalidSampleRate {
        /// Requested sample rate
        sample_rate: u32,
    },
    /// Frequency range empty, inverted, above Nyquist or narrower than one bin
    InvalidFrequencyRange {
        /// Lower edge, Q8 Hz
        low_freq_q8: u32,
        /// Upper edge, Q8 Hz
        upp_freq_q8: u32,
    },
    /// Scratch buffer too small
    ScratchTooSmall {
        /// Bytes required
        required: usize,
        /// Bytes provided
        provided: usize,
    },
    /// Spectrum length differs from fft_size / 2 + 1
    SpectrumLengthMismatch {
        /// Expected number of bins
        expected: usize,
        /// Bins provided
        actual: usize,
    },
    /// Output length differs from the band count
    OutputLengthMismatch {
        /// Expected number of bands
        expected: usize,
        /// Slots provided
        actual: usize,
    },
}

impl LogMelError {
    /// The error code for programmatic handling.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidBandCount { .. } => ErrorCode::InvalidBandCount,
            Self::InvalidFftSize { .. } => ErrorCode::InvalidFftSize,
            Self::InvalidSampleRate { .. } => ErrorCode::InvalidSampleRate,
            Self::InvalidFrequencyRange { .. } => ErrorCode::InvalidFrequencyRange,
            Self::ScratchTooSmall { .. } => ErrorCode::ScratchTooSmall,
            Self::SpectrumLengthMismatch { .. } => ErrorCode::SpectrumLengthMismatch,
            Self::OutputLengthMismatch { .. } => ErrorCode::OutputLengthMismatch,
        }
    }

    /// Get guidance on how to fix this error.
    pub fn guidance(&self) -> &'static str {
        self.code().guidance()
    }
}

impl fmt::Display for LogMelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.code().code())?;
        match *self {
            Self::InvalidBandCount { band_num } => {
                write!(f, "band count {} outside 1..=40", band_num)
            }
            Self::InvalidFftSize { fft_size } => {
                write!(f, "FFT size {} is not a power of two in 64..=4096", fft_size)
            }
            Self::InvalidSampleRate { sample_rate } => {
                write!(f, "sample rate {} Hz is invalid", sample_rate)
            }
            Self::InvalidFrequencyRange {
                low_freq_q8,
                upp_freq_q8,
            } => write!(
                f,
                "frequency range {}..{} Hz is invalid",
                low_freq_q8 as f64 / 256.0,
                upp_freq_q8 as f64 / 256.0
            ),
            Self::ScratchTooSmall { required, provided } => write!(
                f,
                "scratch holds {} bytes, {} required",
                provided, required
            ),
            Self::SpectrumLengthMismatch { expected, actual } => {
                write!(f, "spectrum has {} bins, expected {}", actual, expected)
            }
            Self::OutputLengthMismatch { expected, actual } => {
                write!(f, "output has {} slots, expected {}", actual, expected)
            }
        }
    }
}

impl core::error::Error for LogMelError {}
