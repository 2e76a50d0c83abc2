//! Scalar backend implementation
//!
//! Single-lane backend that always works on any platform. It is the reference
//! the other backends are checked against, and it handles the tails left over
//! by chunked processing.

use crate::ops;
use crate::traits::{FixedVector, LaneMask, WideVector};

/// Single-lane `i32` vector
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct ScalarVector(pub i32);

/// Single-lane `i64` vector
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct ScalarWide(pub i64);

/// Scalar mask wrapper (single boolean)
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct ScalarMask(pub bool);

impl LaneMask for ScalarMask {}

impl FixedVector for ScalarVector {
    type Mask = ScalarMask;
    type Wide = ScalarWide;

    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: i32) -> Self {
        ScalarVector(value)
    }

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> i32>(mut f: F) -> Self {
        ScalarVector(f(0))
    }

    #[inline(always)]
    fn from_slice(slice: &[i32]) -> Self {
        assert!(slice.len() >= Self::LANES, "Slice too short for scalar load");
        ScalarVector(slice[0])
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [i32]) {
        assert!(
            slice.len() >= Self::LANES,
            "Slice too short for scalar store"
        );
        slice[0] = self.0;
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarVector(self.0.wrapping_add(rhs.0))
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        ScalarVector(self.0.wrapping_sub(rhs.0))
    }

    #[inline(always)]
    fn mul_shr(self, rhs: Self, shift: u32) -> Self {
        ScalarVector(ops::mul_shr(self.0, rhs.0, shift))
    }

    #[inline(always)]
    fn mul_round(self, rhs: Self, shift: u32) -> Self {
        ScalarVector(ops::mul_round(self.0, rhs.0, shift))
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        ScalarVector(self.0.min(rhs.0))
    }

    #[inline(always)]
    fn shl(self, shift: u32) -> Self {
        ScalarVector(self.0.wrapping_shl(shift))
    }

    #[inline(always)]
    fn shl_sat(self, shift: u32) -> Self {
        ScalarVector(ops::shl_sat(self.0, shift))
    }

    #[inline(always)]
    fn shr(self, shift: u32) -> Self {
        ScalarVector(ops::shr(self.0, shift))
    }

    #[inline(always)]
    fn shr_round_var(self, shift: Self) -> Self {
        ScalarVector(ops::shr_round_signed(self.0, shift.0))
    }

    #[inline(always)]
    fn redundant_sign_bits(self) -> Self {
        ScalarVector(ops::redundant_sign_bits(self.0))
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 == rhs.0)
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        ScalarMask(self.0 < rhs.0)
    }

    #[inline(always)]
    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self {
        if mask.0 {
            on_true
        } else {
            on_false
        }
    }

    #[inline(always)]
    fn horizontal_min(self) -> i32 {
        self.0
    }
}

impl WideVector for ScalarWide {
    type Narrow = ScalarVector;

    #[inline(always)]
    fn splat(value: i64) -> Self {
        ScalarWide(value)
    }

    #[inline(always)]
    fn square_sum_half(re: ScalarVector, im: ScalarVector) -> Self {
        ScalarWide(ops::square_sum_half(re.0, im.0))
    }

    #[inline(always)]
    fn normalize_even(self) -> (Self, ScalarVector) {
        let (f, shift) = ops::normalize_even(self.0);
        (ScalarWide(f), ScalarVector(shift))
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        ScalarWide(self.0.wrapping_add(rhs.0))
    }

    #[inline(always)]
    fn mul_narrow_round(self, rhs: ScalarVector, shift: u32) -> Self {
        ScalarWide(ops::mul_round_wide_narrow(self.0, rhs.0, shift))
    }

    #[inline(always)]
    fn mul_round(self, rhs: Self, shift: u32) -> Self {
        ScalarWide(ops::mul_round_wide(self.0, rhs.0, shift))
    }

    #[inline(always)]
    fn narrow_shr(self, shift: u32) -> ScalarVector {
        ScalarVector(ops::narrow_shr(self.0, shift))
    }
}
