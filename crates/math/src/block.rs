//! Block floating-point helpers
//!
//! A block of samples shares one exponent: the smallest redundant sign bit
//! count over the block. Shifting every sample left by that amount brings the
//! largest one to full scale while leaving the rest in proportion.

use crate::traits::FixedVector;
use crate::{ops, DefaultFixedVector};
use num_complex::Complex;

/// Block exponent of an all-zero (or empty) block
pub const ZERO_BLOCK_EXPONENT: u32 = 31;

/// Smallest redundant sign bit count over `samples`, using the default backend.
///
/// ```rust
/// use melfix_math::block::block_exponent;
///
/// assert_eq!(block_exponent(&[1 << 20, -(1 << 10), 3]), 10);
/// assert_eq!(block_exponent(&[0, 0, 0]), 31);
/// ```
pub fn block_exponent(samples: &[i32]) -> u32 {
    block_exponent_with::<DefaultFixedVector>(samples)
}

/// [`block_exponent`] on a specific backend.
pub fn block_exponent_with<V: FixedVector>(samples: &[i32]) -> u32 {
    let mut chunks = samples.chunks_exact(V::LANES);
    let mut acc = V::splat(ZERO_BLOCK_EXPONENT as i32);
    for chunk in &mut chunks {
        acc = acc.min(V::from_slice(chunk).redundant_sign_bits());
    }

    let tail = chunks
        .remainder()
        .iter()
        .map(|&x| ops::redundant_sign_bits(x))
        .min()
        .unwrap_or(ZERO_BLOCK_EXPONENT as i32);

    acc.horizontal_min().min(tail) as u32
}

/// Block exponent over both components of a complex block.
pub fn block_exponent_complex(samples: &[Complex<i32>]) -> u32 {
    block_exponent(bytemuck::cast_slice(samples))
}

/// [`block_exponent_complex`] on a specific backend.
pub fn block_exponent_complex_with<V: FixedVector>(samples: &[Complex<i32>]) -> u32 {
    block_exponent_with::<V>(bytemuck::cast_slice(samples))
}

/// Shift every sample of `src` into `dst`: positive `shift` shifts left with
/// saturation, negative shifts right arithmetically. The amount is clamped to
/// ±31.
///
/// # Panics
///
/// Panics if `src` and `dst` differ in length.
pub fn apply_shift(dst: &mut [i32], src: &[i32], shift: i32) {
    apply_shift_with::<DefaultFixedVector>(dst, src, shift)
}

/// [`apply_shift`] on a specific backend.
pub fn apply_shift_with<V: FixedVector>(dst: &mut [i32], src: &[i32], shift: i32) {
    assert_eq!(dst.len(), src.len(), "Shift source and destination differ in length");

    let shift = shift.clamp(-31, 31);
    let mut src_chunks = src.chunks_exact(V::LANES);
    let mut dst_chunks = dst.chunks_exact_mut(V::LANES);

    for (s, d) in (&mut src_chunks).zip(&mut dst_chunks) {
        let v = V::from_slice(s);
        let shifted = if shift >= 0 {
            v.shl_sat(shift as u32)
        } else {
            v.shr((-shift) as u32)
        };
        shifted.to_slice(d);
    }

    for (s, d) in src_chunks
        .remainder()
        .iter()
        .zip(dst_chunks.into_remainder())
    {
        *d = ops::shift_sat(*s, shift);
    }
}

/// [`apply_shift`] over both components of a complex block.
pub fn apply_shift_complex(dst: &mut [Complex<i32>], src: &[Complex<i32>], shift: i32) {
    apply_shift(
        bytemuck::cast_slice_mut(dst),
        bytemuck::cast_slice(src),
        shift,
    )
}

/// [`apply_shift_complex`] on a specific backend.
pub fn apply_shift_complex_with<V: FixedVector>(
    dst: &mut [Complex<i32>],
    src: &[Complex<i32>],
    shift: i32,
) {
    apply_shift_with::<V>(
        bytemuck::cast_slice_mut(dst),
        bytemuck::cast_slice(src),
        shift,
    )
}
