//! Typed fixed-point scalars
//!
//! [`Fixed`] tags a raw `i32` with its number of fractional bits so that Q
//! formats cannot be mixed up at API boundaries. The kernels themselves work on
//! raw `i32` slices; [`bytemuck::TransparentWrapper`] converts between the two
//! without copying.

use bytemuck::TransparentWrapper;
use core::fmt;

/// Signed 32-bit fixed-point value with `FRAC` fractional bits.
///
/// `FRAC` must not exceed 31.
///
/// ```rust
/// use melfix_math::{Q6_25, Q31};
///
/// let x = Q31::from_f64(0.5);
/// assert_eq!(x.raw(), 1 << 30);
///
/// let y: Q6_25 = x.rescale();
/// assert_eq!(y.raw(), 1 << 24);
/// assert_eq!(y.to_f64(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(transparent)]
pub struct Fixed<const FRAC: u32>(i32);

// SAFETY: `Fixed` is `repr(transparent)` over a single `i32`.
unsafe impl<const FRAC: u32> TransparentWrapper<i32> for Fixed<FRAC> {}

/// Q1.31: range `[-1, 1)`
pub type Q31 = Fixed<31>;

/// Q2.30: range `[-2, 2)`
pub type Q30 = Fixed<30>;

/// Q7.25 (sign + 6 integer bits): range `[-64, 64)`
pub type Q6_25 = Fixed<25>;

impl<const FRAC: u32> Fixed<FRAC> {
    /// Zero
    pub const ZERO: Self = Self(0);

    /// Largest representable value
    pub const MAX: Self = Self(i32::MAX);

    /// Smallest representable value
    pub const MIN: Self = Self(i32::MIN);

    /// Wrap a raw value
    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer representation
    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Quantize a real number, rounding to nearest and saturating at the range
    /// limits. NaN maps to zero.
    pub fn from_f64(value: f64) -> Self {
        let scaled = libm::round(value * Self::one());
        if scaled.is_nan() {
            Self::ZERO
        } else if scaled >= i32::MAX as f64 {
            Self::MAX
        } else if scaled <= i32::MIN as f64 {
            Self::MIN
        } else {
            Self(scaled as i32)
        }
    }

    /// Real value represented
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / Self::one()
    }

    /// Convert to another Q format, rounding when bits are dropped and
    /// saturating when bits are added.
    #[inline]
    pub fn rescale<const TO: u32>(self) -> Fixed<TO> {
        Fixed(crate::ops::shr_round_signed(
            self.0,
            FRAC as i32 - TO as i32,
        ))
    }

    /// View a slice of fixed-point values as raw values
    #[inline]
    pub fn as_raw_slice(values: &[Self]) -> &[i32] {
        Self::peel_slice(values)
    }

    /// Mutable raw view of a slice of fixed-point values
    #[inline]
    pub fn as_raw_slice_mut(values: &mut [Self]) -> &mut [i32] {
        Self::peel_slice_mut(values)
    }

    #[inline]
    fn one() -> f64 {
        (1u64 << FRAC) as f64
    }
}

impl<const FRAC: u32> fmt::Display for Fixed<FRAC> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f64())
    }
}
