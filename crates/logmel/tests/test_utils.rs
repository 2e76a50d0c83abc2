//! Test utilities for melfix-logmel
//!
//! Floating-point reference pipeline, spectrum generators and proptest
//! strategies shared by the integration tests.

#![allow(dead_code)]

use melfix_logmel::{LogMel, LogMelParams};
use melfix_math::{Complex, Q6_25};
use proptest::prelude::*;
use rustfft::num_complex::Complex64;
use rustfft::FftPlanner;

/// 2^31 as f64
pub const Q31_SCALE: f64 = 2_147_483_648.0;

/// Largest Q6.25 value as f64
pub const Q6_25_MAX: f64 = i32::MAX as f64 / 33_554_432.0;

/// Absolute tolerance between the fixed-point and reference log energies
pub const LOG_ENERGY_TOLERANCE: f64 = 1e-3;

/// FFT sizes exercised by the scratch sizing properties
pub const FFT_SIZES: [usize; 4] = [256, 512, 1024, 2048];

// ============================================================================
// Reference implementation
// ============================================================================

/// Log-mel energies computed in f64 from the instance's own filter weights
pub fn ref_log_mel(logmel: &LogMel, spectrum: &[Complex<i32>], scale_exp: i32) -> Vec<f64> {
    let bank = logmel.filterbank();
    let gain = libm::exp2(scale_exp as f64) / Q31_SCALE;

    (0..bank.band_num())
        .map(|b| {
            let energy: f64 = (bank.bin_low()..bank.bin_upp())
                .map(|k| {
                    let z = spectrum[k];
                    let mag = libm::hypot(z.re as f64, z.im as f64) * gain;
                    bank.weight(b, k) * mag
                })
                .sum::<f64>()
                * bank.scales()[b].to_f64();

            let log = if logmel.params().base10 {
                libm::log10(energy.max(1.0))
            } else {
                libm::log(energy.max(1.0))
            };
            log.min(Q6_25_MAX)
        })
        .collect()
}

/// Run the fixed-point pipeline with a fresh scratch buffer
pub fn run(logmel: &LogMel, spectrum: &[Complex<i32>], scale_exp: i32) -> Vec<f64> {
    let mut scratch = vec![0u8; logmel.scratch_size()];
    let mut output = vec![Q6_25::ZERO; logmel.band_num()];
    logmel
        .process(&mut scratch, &mut output, spectrum, scale_exp)
        .expect("valid process call");
    output.iter().map(|v| v.to_f64()).collect()
}

/// Assert two log-energy vectors agree within [`LOG_ENERGY_TOLERANCE`]
pub fn assert_log_energies_close(got: &[f64], expected: &[f64]) {
    assert_eq!(got.len(), expected.len());
    for (b, (g, e)) in got.iter().zip(expected).enumerate() {
        assert!(
            (g - e).abs() <= LOG_ENERGY_TOLERANCE,
            "band {}: got {:.6}, expected {:.6}",
            b,
            g,
            e
        );
    }
}

// ============================================================================
// Spectrum generators
// ============================================================================

/// Q31 spectrum of a Hann-windowed cosine at an exact FFT bin.
///
/// The time signal has peak `amplitude` in 16-bit PCM units. Returns the
/// positive-frequency bins and the matching scale exponent.
pub fn tone_spectrum(fft_size: usize, bin: usize, amplitude: f64) -> (Vec<Complex<i32>>, i32) {
    let mut buffer: Vec<Complex64> = (0..fft_size)
        .map(|n| {
            let phase = 2.0 * core::f64::consts::PI * n as f64 / fft_size as f64;
            let hann = 0.5 - 0.5 * libm::cos(phase);
            let x = amplitude * hann * libm::cos(phase * bin as f64);
            Complex64::new(x, 0.0)
        })
        .collect();

    FftPlanner::<f64>::new()
        .plan_fft_forward(fft_size)
        .process(&mut buffer);

    // |X| <= fft_size * amplitude, so this shift keeps every bin inside Q31
    let bound = fft_size as f64 * amplitude;
    let scale_exp = libm::ceil(libm::log2(bound)) as i32 + 1;
    let scale = Q31_SCALE / libm::exp2(scale_exp as f64);

    let spectrum = buffer[..fft_size / 2 + 1]
        .iter()
        .map(|z| Complex::new(quantize(z.re * scale), quantize(z.im * scale)))
        .collect();
    (spectrum, scale_exp)
}

fn quantize(x: f64) -> i32 {
    libm::round(x).clamp(i32::MIN as f64, i32::MAX as f64) as i32
}

// ============================================================================
// Proptest strategies
// ============================================================================

/// Valid parameters spanning band counts 1..=40 and the tested FFT sizes
pub fn valid_params() -> impl Strategy<Value = LogMelParams> {
    (
        1usize..=40,
        prop::sample::select(FFT_SIZES.to_vec()),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(band_num, fft_size, slaney, area, base10)| LogMelParams {
            band_num,
            fft_size,
            mel_scale: if slaney {
                melfix_logmel::MelScale::AuditoryToolbox
            } else {
                melfix_logmel::MelScale::Htk
            },
            normalization: if area {
                melfix_logmel::FilterNormalization::Area
            } else {
                melfix_logmel::FilterNormalization::Unit
            },
            base10,
            ..Default::default()
        })
}

/// Spectrum whose bins share one magnitude range
pub fn spectrum_for(len: usize) -> impl Strategy<Value = Vec<Complex<i32>>> {
    (8u32..=31).prop_flat_map(move |bits| {
        let bound = ((1i64 << bits) - 1) as i32;
        prop::collection::vec(
            (-bound..=bound, -bound..=bound).prop_map(|(re, im)| Complex::new(re, im)),
            len,
        )
    })
}
