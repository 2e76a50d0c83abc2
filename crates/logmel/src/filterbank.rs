//! Triangular mel filterbank
//!
//! Construction places `band_num + 2` corner frequencies equally spaced on the
//! mel axis and converts them to fractional FFT-bin positions `p_j`. Band `b`
//! rises over `[p_b, p_{b+1}]` and falls over `[p_{b+1}, p_{b+2}]`, so every
//! bin lies in exactly one segment and contributes to at most two bands: the
//! rising edge of one and the falling edge of the previous one. One Q31 weight
//! per bin is therefore enough; the falling weight is its complement.
//!
//! Accumulation runs entirely in integers and yields one normalized
//! `(mantissa, exponent)` energy per band.

use alloc::vec::Vec;
use log::debug;
use melfix_math::Q31;

use crate::config::{FilterNormalization, LogMelParams, MAX_BANDS};
use crate::error::LogMelError;

/// Gain of one band: `mantissa · 2^(-31 - exponent)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandScale {
    /// Q31 mantissa in `[2^30, 2^31)`
    pub mantissa: i32,
    /// Binary exponent
    pub exponent: i16,
}

impl BandScale {
    /// Unity gain
    pub const UNIT: Self = Self {
        mantissa: 1 << 30,
        exponent: -1,
    };

    /// Quantize a positive gain.
    pub fn from_f64(value: f64) -> Self {
        let (m, e) = libm::frexp(value);
        let mut mantissa = libm::round(m * 2_147_483_648.0) as i64;
        let mut e = e;
        if mantissa >= 1 << 31 {
            mantissa = 1 << 30;
            e += 1;
        }
        Self {
            mantissa: mantissa as i32,
            exponent: (-e).clamp(i16::MIN as i32, i16::MAX as i32) as i16,
        }
    }

    /// Gain as a real number
    pub fn to_f64(self) -> f64 {
        self.mantissa as f64 * libm::exp2(-31.0 - self.exponent as f64)
    }
}

/// Mel filterbank geometry and weight tables.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterBank {
    band_num: usize,
    bin_low: usize,
    bin_upp: usize,
    /// Corner frequencies in Hz, `band_num + 2` entries
    corners_hz: Vec<f64>,
    /// First bin of each segment, `band_num + 2` entries ending at `bin_upp`
    segments: Vec<usize>,
    /// Rising-edge Q31 weight of every bin in `bin_low..bin_upp`
    weights: Vec<i32>,
    scales: Vec<BandScale>,
}

impl FilterBank {
    /// Build the filterbank for `params`.
    pub fn design(params: &LogMelParams) -> Result<Self, LogMelError> {
        params.validate()?;

        let band_num = params.band_num;
        let points = band_num + 2;
        let scale = params.mel_scale;
        let bins_per_hz = params.fft_size as f64 / params.sample_rate as f64;

        let low_hz = params.low_freq_q8 as f64 / 256.0;
        let upp_hz = params.upp_freq_q8 as f64 / 256.0;
        let mel_low = scale.hz_to_mel(low_hz);
        let mel_upp = scale.hz_to_mel(upp_hz);

        let corners_hz: Vec<f64> = (0..points)
            .map(|j| {
                if j == 0 {
                    low_hz
                } else if j == points - 1 {
                    upp_hz
                } else {
                    let mel = mel_low + (mel_upp - mel_low) * j as f64 / (points - 1) as f64;
                    scale.mel_to_hz(mel)
                }
            })
            .collect();
        let positions: Vec<f64> = corners_hz.iter().map(|hz| hz * bins_per_hz).collect();

        let bin_low = libm::floor(positions[0]) as usize + 1;
        let bin_upp = (libm::ceil(positions[points - 1]) as usize).min(params.spectrum_len());
        if bin_upp <= bin_low {
            return Err(LogMelError::InvalidFrequencyRange {
                low_freq_q8: params.low_freq_q8,
                upp_freq_q8: params.upp_freq_q8,
            });
        }

        let mut segments = Vec::with_capacity(points);
        segments.push(bin_low);
        for &p in &positions[1..points - 1] {
            segments.push((libm::ceil(p) as usize).clamp(bin_low, bin_upp));
        }
        segments.push(bin_upp);

        let mut weights = Vec::with_capacity(bin_upp - bin_low);
        for j in 0..points - 1 {
            let (start, end) = (positions[j], positions[j + 1]);
            for k in segments[j]..segments[j + 1] {
                let w = (k as f64 - start) / (end - start);
                weights.push(Q31::from_f64(w).raw());
            }
        }

        let scales = (0..band_num)
            .map(|b| match params.normalization {
                FilterNormalization::Unit => BandScale::UNIT,
                FilterNormalization::Area => {
                    BandScale::from_f64(2.0 / (corners_hz[b + 2] - corners_hz[b]))
                }
            })
            .collect();

        debug!(
            "mel filterbank: {} bands over bins {}..{} ({:?}, {:?})",
            band_num, bin_low, bin_upp, params.mel_scale, params.normalization
        );

        Ok(Self {
            band_num,
            bin_low,
            bin_upp,
            corners_hz,
            segments,
            weights,
            scales,
        })
    }

    /// Number of bands
    pub fn band_num(&self) -> usize {
        self.band_num
    }

    /// First bin with non-zero weight
    pub fn bin_low(&self) -> usize {
        self.bin_low
    }

    /// One past the last bin with non-zero weight
    pub fn bin_upp(&self) -> usize {
        self.bin_upp
    }

    /// Number of bins in `bin_low..bin_upp`
    pub fn bin_count(&self) -> usize {
        self.bin_upp - self.bin_low
    }

    /// Corner frequencies in Hz: band `b` spans `corners_hz()[b]..corners_hz()[b + 2]`
    pub fn corners_hz(&self) -> &[f64] {
        &self.corners_hz
    }

    /// Segment start bins
    pub fn segments(&self) -> &[usize] {
        &self.segments
    }

    /// Rising-edge weights, Q31, one per bin in `bin_low..bin_upp`
    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// Per-band gains
    pub fn scales(&self) -> &[BandScale] {
        &self.scales
    }

    /// Weight of `bin` in `band` as a real number.
    pub fn weight(&self, band: usize, bin: usize) -> f64 {
        if band >= self.band_num || bin < self.bin_low || bin >= self.bin_upp {
            return 0.0;
        }
        let w = self.weights[bin - self.bin_low] as f64 / 2_147_483_648.0;
        if (self.segments[band]..self.segments[band + 1]).contains(&bin) {
            w
        } else if (self.segments[band + 1]..self.segments[band + 2]).contains(&bin) {
            1.0 - w
        } else {
            0.0
        }
    }

    /// Weighted band energies of a Q30 magnitude spectrum.
    ///
    /// `magnitude` covers `bin_low..bin_upp`; its true values are
    /// `magnitude·2^(spec_exp - 30)`. Band `b` receives
    /// `mantissas[b]·2^(-31 - exponents[b])` with the mantissa either zero or
    /// in `[2^30, 2^31)`.
    ///
    /// # Panics
    ///
    /// Panics if `magnitude` does not hold `bin_count()` values or the outputs
    /// do not hold `band_num()` values.
    pub fn accumulate(
        &self,
        magnitude: &[i32],
        spec_exp: i32,
        mantissas: &mut [i32],
        exponents: &mut [i16],
    ) {
        assert_eq!(magnitude.len(), self.bin_count());
        assert_eq!(mantissas.len(), self.band_num);
        assert_eq!(exponents.len(), self.band_num);

        let mut acc = [0i64; MAX_BANDS];
        for j in 0..=self.band_num {
            let lo = self.segments[j] - self.bin_low;
            let hi = self.segments[j + 1] - self.bin_low;
            for (&m, &w) in magnitude[lo..hi].iter().zip(&self.weights[lo..hi]) {
                let m = m as i64;
                let rising = (w as i64 * m) >> 31;
                if j < self.band_num {
                    acc[j] += rising;
                }
                if j > 0 {
                    acc[j - 1] += m - rising;
                }
            }
        }

        for (((&a, scale), mant), exp) in acc
            .iter()
            .zip(&self.scales)
            .zip(mantissas.iter_mut())
            .zip(exponents.iter_mut())
        {
            (*mant, *exp) = normalize_energy(a, *scale, spec_exp);
        }
    }
}

/// Apply the band gain to a Q30 accumulator and renormalize.
fn normalize_energy(acc: i64, scale: BandScale, spec_exp: i32) -> (i32, i16) {
    if acc <= 0 {
        return (0, 0);
    }
    let t = ((acc as i128 * scale.mantissa as i128) >> 31) as i64;
    if t == 0 {
        return (0, 0);
    }

    // Shift that leaves exactly 31 significant bits
    let sh = 33 - t.leading_zeros() as i32;
    let mant = if sh >= 0 { t >> sh } else { t << -sh };
    let exp = -1 - sh as i64 - spec_exp as i64 + scale.exponent as i64;
    (
        mant as i32,
        exp.clamp(i16::MIN as i64, i16::MAX as i64) as i16,
    )
}
