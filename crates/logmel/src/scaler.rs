//! Log scaling of band energies
//!
//! Converts `(mantissa, exponent)` energies to `ln(max(1, E))` or
//! `log10(max(1, E))` in Q6.25. With `E = m·2^(-31 - e)`,
//! `log2(E) = log2(m/2^31) - e`; clamping that at zero is the `max(1, ·)`
//! floor, and a fixed multiplier converts to the requested base.

use melfix_math::math::log2_with;
use melfix_math::{DefaultFixedVector, FixedVector, Q6_25};

/// `ln 2` in Q31
pub const LN2_Q31: i64 = 1_488_522_236;

/// `log10 2` in Q31
pub const LOG10_2_Q31: i64 = 646_456_993;

/// Log-scale every band energy into `output`.
///
/// Zero mantissas map to zero; every other mantissa must be normalized to
/// `[2^30, 2^31)`.
///
/// ```rust
/// use melfix_logmel::scaler::log_scale;
/// use melfix_math::Q6_25;
///
/// // Energies 0, 1 and 2^10
/// let mantissas = [0, 1 << 30, 1 << 30];
/// let exponents = [0, -1, -11];
/// let mut out = [Q6_25::ZERO; 3];
/// log_scale(&mantissas, &exponents, false, &mut out);
///
/// assert_eq!(out[0].raw(), 0);
/// assert_eq!(out[1].raw(), 0);
/// assert!((out[2].to_f64() - 10.0 * core::f64::consts::LN_2).abs() < 1e-6);
/// ```
///
/// # Panics
///
/// Panics if the three slices differ in length.
pub fn log_scale(mantissas: &[i32], exponents: &[i16], base10: bool, output: &mut [Q6_25]) {
    log_scale_with::<DefaultFixedVector>(mantissas, exponents, base10, output)
}

/// [`log_scale`] on a specific backend.
pub fn log_scale_with<V: FixedVector>(
    mantissas: &[i32],
    exponents: &[i16],
    base10: bool,
    output: &mut [Q6_25],
) {
    assert_eq!(mantissas.len(), exponents.len());
    assert_eq!(mantissas.len(), output.len());

    let base = if base10 { LOG10_2_Q31 } else { LN2_Q31 };

    // log2 of the mantissas lands in the output first, then is rescaled in place
    let raw = Q6_25::as_raw_slice_mut(output);
    log2_with::<V>(mantissas, raw);

    for ((out, &m), &e) in raw.iter_mut().zip(mantissas).zip(exponents) {
        *out = if m == 0 { 0 } else { scale_band(*out, e, base) };
    }
}

/// Combine a Q31 mantissa log with its exponent and convert the base.
#[inline]
fn scale_band(log2_mantissa: i32, exponent: i16, base_q31: i64) -> i32 {
    // |log2| < 2^41 in Q25, so the product fits in 128 bits
    let log2_q25 = ((log2_mantissa as i64 + 32) >> 6) - ((exponent as i64) << 25);
    let scaled = (log2_q25.max(0) as i128 * base_q31 as i128 + (1 << 30)) >> 31;
    scaled.clamp(0, i32::MAX as i128) as i32
}
