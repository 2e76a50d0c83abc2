//! Core fixed-point vector traits
//!
//! Kernels in this crate are written once against these traits and compile to
//! whichever backend is selected. Every backend applies the primitives in
//! [`crate::ops`] lane by lane, so results never depend on the backend.

/// Lane mask produced by vector comparisons and consumed by
/// [`FixedVector::select`].
pub trait LaneMask: Copy + Clone + Sized {}

/// Vector of `i32` lanes holding fixed-point values.
///
/// Arithmetic is wrapping unless the method name says otherwise. Products are
/// always formed in 64 bits.
///
/// # Example
///
/// ```rust
/// use melfix_math::{DefaultFixedVector, FixedVector};
///
/// let a = DefaultFixedVector::splat(1 << 30);
/// let b = a.mul_round(a, 31);
/// assert_eq!(b.horizontal_min(), 1 << 29);
/// ```
pub trait FixedVector: Copy + Clone + Sized {
    /// Associated mask type for comparisons
    type Mask: LaneMask;

    /// Matching vector of 64-bit lanes
    type Wide: WideVector<Narrow = Self>;

    /// Number of lanes
    const LANES: usize;

    // Construction

    /// Broadcast a value to all lanes
    fn splat(value: i32) -> Self;

    /// Build a vector lane by lane
    fn from_fn<F: FnMut(usize) -> i32>(f: F) -> Self;

    /// Load from a slice
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than LANES elements
    fn from_slice(slice: &[i32]) -> Self;

    /// Store to a slice
    ///
    /// # Panics
    ///
    /// Panics if the slice has fewer than LANES elements
    fn to_slice(self, slice: &mut [i32]);

    // Arithmetic

    /// Wrapping addition
    fn add(self, rhs: Self) -> Self;

    /// Wrapping subtraction
    fn sub(self, rhs: Self) -> Self;

    /// `(self * rhs) >> shift`, truncating, saturated
    fn mul_shr(self, rhs: Self, shift: u32) -> Self;

    /// `(self * rhs) >> shift` with round-half-up, saturated
    fn mul_round(self, rhs: Self, shift: u32) -> Self;

    /// Element-wise minimum
    fn min(self, rhs: Self) -> Self;

    // Shifts

    /// Wrapping left shift
    fn shl(self, shift: u32) -> Self;

    /// Saturating left shift
    fn shl_sat(self, shift: u32) -> Self;

    /// Arithmetic right shift
    fn shr(self, shift: u32) -> Self;

    /// Per-lane shift: positive amounts shift right with rounding, negative
    /// amounts shift left with saturation
    fn shr_round_var(self, shift: Self) -> Self;

    /// Per-lane redundant sign bit count
    fn redundant_sign_bits(self) -> Self;

    // Comparison

    /// Lane-wise equality
    fn eq(self, rhs: Self) -> Self::Mask;

    /// Lane-wise less-than
    fn lt(self, rhs: Self) -> Self::Mask;

    /// Pick lanes from `on_true` where the mask is set, else from `on_false`
    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self;

    // Horizontal

    /// Minimum across lanes
    fn horizontal_min(self) -> i32;
}

/// Vector of `i64` lanes paired with a [`FixedVector`].
///
/// Used for squared magnitudes and polynomial accumulators that need more
/// headroom than 32 bits. Products are formed in 128 bits.
pub trait WideVector: Copy + Clone + Sized {
    /// The narrow vector this one widens
    type Narrow: FixedVector<Wide = Self>;

    /// Broadcast a value to all lanes
    fn splat(value: i64) -> Self;

    /// `(re² + im²) / 2` per lane
    fn square_sum_half(re: Self::Narrow, im: Self::Narrow) -> Self;

    /// Even left shift into `[2^61, 2^63)`; returns the shifted value and the
    /// shift. Zero lanes yield `(0, 62)`.
    fn normalize_even(self) -> (Self, Self::Narrow);

    /// Wrapping addition
    fn add(self, rhs: Self) -> Self;

    /// `(self * rhs) >> shift` against narrow lanes, rounded, saturated
    fn mul_narrow_round(self, rhs: Self::Narrow, shift: u32) -> Self;

    /// `(self * rhs) >> shift`, rounded, saturated
    fn mul_round(self, rhs: Self, shift: u32) -> Self;

    /// Arithmetic right shift then saturate into narrow lanes
    fn narrow_shr(self, shift: u32) -> Self::Narrow;
}
