//! Base-2 logarithm of normalized Q31 mantissas
//!
//! Input `x` is a mantissa in `[0.5, 1)`; the result is `log2(x)` in Q31, so it
//! lies in `[-1, 0]`.
//!
//! # Algorithm
//!
//! The argument is first reduced to `y` in `[√½, √2)` by doubling mantissas
//! below `√½`, which costs exactly −1 in the result. With `u = 1 − y`,
//! `−ln(y) = u·q(u)` where `q` is a degree-8 polynomial evaluated by Horner's
//! rule in Q60 with 128-bit products. The natural log is then scaled by
//! `1/ln 2`.
//!
//! # Error Bounds
//!
//! - Maximum absolute error: 30 LSB (about 1.4e-8) over `[0.5, 1)`
//! - Monotone non-decreasing over `[0.5, 1)`
//! - `log2(0.5)` is exactly −1, `log2(1 − 2^-31)` is −1 LSB
//! - Non-positive input returns `i32::MIN`

#![allow(clippy::excessive_precision, clippy::inconsistent_digit_grouping)]

use crate::backends::scalar::ScalarVector;
use crate::traits::{FixedVector, WideVector};
use crate::DefaultFixedVector;

/// `√½` in Q31, reduction threshold
const SQRT_HALF_Q31: i32 = 1_518_500_250;

/// `1/ln 2` in Q62
const INV_LN2_Q62: i64 = 6_653_256_548_922_161_152;

/// Coefficients of `q(u) = −ln(1 − u)/u` in Q60, lowest order first
const LOG_POLY_Q60: [i64; 9] = [
    1_152_921_445_452_807_808,
    576_460_464_865_391_296,
    384_322_826_283_859_968,
    288_268_632_243_855_744,
    229_917_850_597_917_888,
    190_572_197_338_063_328,
    173_595_821_792_084_352,
    168_511_428_865_261_568,
    100_810_826_295_608_480,
];

/// `log2` of one vector of Q31 mantissas.
#[inline(always)]
pub fn log2_lanes<V: FixedVector>(x: V) -> V {
    let reduce = x.lt(V::splat(SQRT_HALF_Q31));
    let y = V::select(reduce, x.add(x), x);

    // 1 - y in Q31; wraps correctly for y up to √2
    let u = V::splat(i32::MIN).sub(y);

    let mut acc = V::Wide::splat(LOG_POLY_Q60[8]);
    for &c in LOG_POLY_Q60[..8].iter().rev() {
        acc = V::Wide::splat(c).add(acc.mul_narrow_round(u, 31));
    }

    // -ln(y) in Q62, then -log2(y) in Q31
    let neg_ln = acc.mul_narrow_round(u, 29);
    let neg_log2 = neg_ln
        .mul_round(V::Wide::splat(INV_LN2_Q62), 93)
        .narrow_shr(0);

    let zero = V::splat(0);
    let offset = V::select(reduce, V::splat(i32::MIN), zero);
    let out = zero.sub(neg_log2).add(offset).min(zero);

    V::select(x.lt(V::splat(1)), V::splat(i32::MIN), out)
}

/// `log2` of a single Q31 mantissa.
///
/// ```rust
/// use melfix_math::math::log2_scalar;
///
/// assert_eq!(log2_scalar(1 << 30), i32::MIN);
/// assert_eq!(log2_scalar(i32::MAX), -1);
/// assert_eq!(log2_scalar(0), i32::MIN);
/// ```
#[inline]
pub fn log2_scalar(x: i32) -> i32 {
    log2_lanes(ScalarVector(x)).0
}

/// `log2` of every mantissa in `input`, written to `output` in Q31.
///
/// # Panics
///
/// Panics if `input` and `output` differ in length.
pub fn log2(input: &[i32], output: &mut [i32]) {
    log2_with::<DefaultFixedVector>(input, output)
}

/// [`log2`] on a specific backend.
pub fn log2_with<V: FixedVector>(input: &[i32], output: &mut [i32]) {
    assert_eq!(
        input.len(),
        output.len(),
        "Log2 input and output differ in length"
    );

    let mut in_chunks = input.chunks_exact(V::LANES);
    let mut out_chunks = output.chunks_exact_mut(V::LANES);

    for (src, dst) in (&mut in_chunks).zip(&mut out_chunks) {
        log2_lanes(V::from_slice(src)).to_slice(dst);
    }

    for (src, dst) in in_chunks
        .remainder()
        .iter()
        .zip(out_chunks.into_remainder())
    {
        *dst = log2_scalar(*src);
    }
}
