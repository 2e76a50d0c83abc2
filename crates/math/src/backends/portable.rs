//! Portable multi-lane backend
//!
//! Fixed-width lane arrays processed with plain loops that the compiler
//! auto-vectorizes on every target. `PortableVector<4>` maps onto 128-bit
//! registers, `PortableVector<8>` onto 256-bit ones.

use crate::ops;
use crate::traits::{FixedVector, LaneMask, WideVector};
use core::array;

/// `N`-lane `i32` vector
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct PortableVector<const N: usize>(pub [i32; N]);

/// `N`-lane `i64` vector
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct PortableWide<const N: usize>(pub [i64; N]);

/// `N`-lane mask
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PortableMask<const N: usize>(pub [bool; N]);

impl<const N: usize> LaneMask for PortableMask<N> {}

/// Four-lane portable vector
pub type Portable4 = PortableVector<4>;

/// Eight-lane portable vector
pub type Portable8 = PortableVector<8>;

impl<const N: usize> PortableVector<N> {
    #[inline(always)]
    fn map(self, f: impl Fn(i32) -> i32) -> Self {
        PortableVector(array::from_fn(|i| f(self.0[i])))
    }

    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(i32, i32) -> i32) -> Self {
        PortableVector(array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }
}

impl<const N: usize> PortableWide<N> {
    #[inline(always)]
    fn zip(self, rhs: Self, f: impl Fn(i64, i64) -> i64) -> Self {
        PortableWide(array::from_fn(|i| f(self.0[i], rhs.0[i])))
    }
}

impl<const N: usize> FixedVector for PortableVector<N> {
    type Mask = PortableMask<N>;
    type Wide = PortableWide<N>;

    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: i32) -> Self {
        PortableVector([value; N])
    }

    #[inline(always)]
    fn from_fn<F: FnMut(usize) -> i32>(f: F) -> Self {
        PortableVector(array::from_fn(f))
    }

    #[inline(always)]
    fn from_slice(slice: &[i32]) -> Self {
        assert!(slice.len() >= N, "Slice too short for vector load");
        PortableVector(array::from_fn(|i| slice[i]))
    }

    #[inline(always)]
    fn to_slice(self, slice: &mut [i32]) {
        assert!(slice.len() >= N, "Slice too short for vector store");
        slice[..N].copy_from_slice(&self.0);
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, i32::wrapping_add)
    }

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, i32::wrapping_sub)
    }

    #[inline(always)]
    fn mul_shr(self, rhs: Self, shift: u32) -> Self {
        self.zip(rhs, |a, b| ops::mul_shr(a, b, shift))
    }

    #[inline(always)]
    fn mul_round(self, rhs: Self, shift: u32) -> Self {
        self.zip(rhs, |a, b| ops::mul_round(a, b, shift))
    }

    #[inline(always)]
    fn min(self, rhs: Self) -> Self {
        self.zip(rhs, Ord::min)
    }

    #[inline(always)]
    fn shl(self, shift: u32) -> Self {
        self.map(|a| a.wrapping_shl(shift))
    }

    #[inline(always)]
    fn shl_sat(self, shift: u32) -> Self {
        self.map(|a| ops::shl_sat(a, shift))
    }

    #[inline(always)]
    fn shr(self, shift: u32) -> Self {
        self.map(|a| ops::shr(a, shift))
    }

    #[inline(always)]
    fn shr_round_var(self, shift: Self) -> Self {
        self.zip(shift, ops::shr_round_signed)
    }

    #[inline(always)]
    fn redundant_sign_bits(self) -> Self {
        self.map(ops::redundant_sign_bits)
    }

    #[inline(always)]
    fn eq(self, rhs: Self) -> Self::Mask {
        PortableMask(array::from_fn(|i| self.0[i] == rhs.0[i]))
    }

    #[inline(always)]
    fn lt(self, rhs: Self) -> Self::Mask {
        PortableMask(array::from_fn(|i| self.0[i] < rhs.0[i]))
    }

    #[inline(always)]
    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self {
        PortableVector(array::from_fn(|i| {
            if mask.0[i] {
                on_true.0[i]
            } else {
                on_false.0[i]
            }
        }))
    }

    #[inline(always)]
    fn horizontal_min(self) -> i32 {
        self.0.iter().copied().min().unwrap_or(i32::MAX)
    }
}

impl<const N: usize> WideVector for PortableWide<N> {
    type Narrow = PortableVector<N>;

    #[inline(always)]
    fn splat(value: i64) -> Self {
        PortableWide([value; N])
    }

    #[inline(always)]
    fn square_sum_half(re: PortableVector<N>, im: PortableVector<N>) -> Self {
        PortableWide(array::from_fn(|i| ops::square_sum_half(re.0[i], im.0[i])))
    }

    #[inline(always)]
    fn normalize_even(self) -> (Self, PortableVector<N>) {
        let mut shifts = [0i32; N];
        let values = array::from_fn(|i| {
            let (f, shift) = ops::normalize_even(self.0[i]);
            shifts[i] = shift;
            f
        });
        (PortableWide(values), PortableVector(shifts))
    }

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, i64::wrapping_add)
    }

    #[inline(always)]
    fn mul_narrow_round(self, rhs: PortableVector<N>, shift: u32) -> Self {
        PortableWide(array::from_fn(|i| {
            ops::mul_round_wide_narrow(self.0[i], rhs.0[i], shift)
        }))
    }

    #[inline(always)]
    fn mul_round(self, rhs: Self, shift: u32) -> Self {
        self.zip(rhs, |a, b| ops::mul_round_wide(a, b, shift))
    }

    #[inline(always)]
    fn narrow_shr(self, shift: u32) -> PortableVector<N> {
        PortableVector(array::from_fn(|i| ops::narrow_shr(self.0[i], shift)))
    }
}
