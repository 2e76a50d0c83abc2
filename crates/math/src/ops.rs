//! Scalar fixed-point primitives
//!
//! Every lane operation of the vector backends is defined here once, on plain
//! `i32`/`i64` values. Backends apply these per lane, so any two backends
//! produce bit-identical results for the same input.

/// Saturate a 64-bit intermediate to the `i32` range.
#[inline(always)]
pub fn sat32(x: i64) -> i32 {
    x.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Saturate a 128-bit intermediate to the `i64` range.
#[inline(always)]
pub fn sat64(x: i128) -> i64 {
    x.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Number of redundant sign bits of `x`.
///
/// This is the left shift that brings a non-zero value to full scale without
/// overflow. Zero and `-1` report 31.
///
/// ```rust
/// use melfix_math::ops::redundant_sign_bits;
///
/// assert_eq!(redundant_sign_bits(0), 31);
/// assert_eq!(redundant_sign_bits(1), 30);
/// assert_eq!(redundant_sign_bits(i32::MIN), 0);
/// assert_eq!(redundant_sign_bits(-1 << 20), 11);
/// ```
#[inline(always)]
pub fn redundant_sign_bits(x: i32) -> i32 {
    (x ^ (x >> 31)).leading_zeros() as i32 - 1
}

/// Saturating left shift.
#[inline(always)]
pub fn shl_sat(x: i32, shift: u32) -> i32 {
    sat32((x as i64) << shift.min(32))
}

/// Arithmetic right shift, clamped to 31 places.
#[inline(always)]
pub fn shr(x: i32, shift: u32) -> i32 {
    x >> shift.min(31)
}

/// Right shift with round-half-up.
#[inline(always)]
pub fn shr_round(x: i32, shift: u32) -> i32 {
    if shift == 0 {
        return x;
    }
    let shift = shift.min(32);
    sat32(((x as i64) + (1i64 << (shift - 1))) >> shift)
}

/// Signed shift: positive values shift left with saturation, negative values
/// shift right arithmetically. The amount is clamped to ±31.
///
/// ```rust
/// use melfix_math::ops::shift_sat;
///
/// assert_eq!(shift_sat(3, 2), 12);
/// assert_eq!(shift_sat(-12, -2), -3);
/// assert_eq!(shift_sat(1 << 30, 4), i32::MAX);
/// ```
#[inline(always)]
pub fn shift_sat(x: i32, shift: i32) -> i32 {
    let shift = shift.clamp(-31, 31);
    if shift >= 0 {
        shl_sat(x, shift as u32)
    } else {
        x >> (-shift) as u32
    }
}

/// Signed shift in the opposite sense to [`shift_sat`]: positive values shift
/// right with rounding, negative values shift left with saturation.
#[inline(always)]
pub fn shr_round_signed(x: i32, shift: i32) -> i32 {
    if shift >= 0 {
        shr_round(x, shift as u32)
    } else {
        shl_sat(x, shift.unsigned_abs())
    }
}

/// `(a * b) >> shift` with a 64-bit product, saturated to `i32`.
#[inline(always)]
pub fn mul_shr(a: i32, b: i32, shift: u32) -> i32 {
    sat32(((a as i64) * (b as i64)) >> shift.min(63))
}

/// `(a * b) >> shift` with round-half-up, saturated to `i32`.
#[inline(always)]
pub fn mul_round(a: i32, b: i32, shift: u32) -> i32 {
    let p = (a as i64) * (b as i64);
    if shift == 0 {
        return sat32(p);
    }
    let shift = shift.min(62);
    sat32((p + (1i64 << (shift - 1))) >> shift)
}

/// `(re² + im²) / 2` as a non-negative 64-bit value.
///
/// For Q31 inputs this is the squared modulus in Q61 and never overflows,
/// including `re = im = i32::MIN`.
#[inline(always)]
pub fn square_sum_half(re: i32, im: i32) -> i64 {
    let re2 = ((re as i64) * (re as i64)) as u64;
    let im2 = ((im as i64) * (im as i64)) as u64;
    ((re2 + im2) >> 1) as i64
}

/// Normalize a non-negative value by an even left shift.
///
/// Returns the shifted value, which lies in `[2^61, 2^63)` for non-zero
/// input, together with the shift. Zero yields `(0, 62)`.
#[inline(always)]
pub fn normalize_even(w: i64) -> (i64, i32) {
    let lz = w.leading_zeros() as i32;
    let shift = (lz - 1) & !1;
    (w << shift, shift)
}

/// `(a * b) >> shift` with a 128-bit product and round-half-up, saturated to `i64`.
#[inline(always)]
pub fn mul_round_wide(a: i64, b: i64, shift: u32) -> i64 {
    let p = (a as i128) * (b as i128);
    if shift == 0 {
        return sat64(p);
    }
    let shift = shift.min(126);
    sat64((p + (1i128 << (shift - 1))) >> shift)
}

/// `a * b` for an `i64` by `i32` with a 128-bit product and rounded right shift.
#[inline(always)]
pub fn mul_round_wide_narrow(a: i64, b: i32, shift: u32) -> i64 {
    mul_round_wide(a, b as i64, shift)
}

/// Arithmetic right shift of a 64-bit value, saturated to `i32`.
#[inline(always)]
pub fn narrow_shr(x: i64, shift: u32) -> i32 {
    sat32(x >> shift.min(63))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redundant_sign_bits_powers_of_two() {
        for k in 0..31 {
            assert_eq!(redundant_sign_bits(1 << k), 30 - k);
            assert_eq!(redundant_sign_bits(-(1 << k)), 31 - k);
        }
    }

    #[test]
    fn test_redundant_sign_bits_extremes() {
        assert_eq!(redundant_sign_bits(i32::MAX), 0);
        assert_eq!(redundant_sign_bits(i32::MIN), 0);
        assert_eq!(redundant_sign_bits(-1), 31);
    }

    #[test]
    fn test_shl_sat_saturates() {
        assert_eq!(shl_sat(1, 31), i32::MAX);
        assert_eq!(shl_sat(-1, 31), i32::MIN);
        assert_eq!(shl_sat(-1, 40), i32::MIN);
        assert_eq!(shl_sat(0, 40), 0);
        assert_eq!(shl_sat(5, 1), 10);
    }

    #[test]
    fn test_shr_round_ties_up() {
        assert_eq!(shr_round(3, 1), 2);
        assert_eq!(shr_round(-3, 1), -1);
        assert_eq!(shr_round(i32::MAX, 1), 1 << 30);
        assert_eq!(shr_round(7, 0), 7);
    }

    #[test]
    fn test_shr_round_signed_left_saturates() {
        assert_eq!(shr_round_signed(1 << 30, -1), i32::MAX);
        assert_eq!(shr_round_signed(100, -2), 400);
        assert_eq!(shr_round_signed(100, 2), 25);
    }

    #[test]
    fn test_square_sum_half_extremes() {
        assert_eq!(square_sum_half(i32::MIN, i32::MIN), 1i64 << 62);
        assert_eq!(square_sum_half(0, 0), 0);
        assert_eq!(square_sum_half(3, 4), 12);
    }

    #[test]
    fn test_normalize_even_range() {
        for w in [1i64, 2, 3, 1 << 40, (1 << 62) - 1, 1 << 62, 12345678901] {
            let (f, s) = normalize_even(w);
            assert!(f >= 1 << 61, "w={w} f={f}");
            assert_eq!(s % 2, 0);
            assert_eq!(f >> s, w);
        }
        assert_eq!(normalize_even(0), (0, 62));
    }

    #[test]
    fn test_mul_round_wide() {
        assert_eq!(mul_round_wide(1 << 60, 1 << 60, 60), 1 << 60);
        assert_eq!(mul_round_wide(i64::MAX, i64::MAX, 0), i64::MAX);
        assert_eq!(mul_round_wide(3, 1, 1), 2);
    }
}
