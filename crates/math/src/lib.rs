#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! melfix-math: fixed-point vector kernels for log-mel front ends
//!
//! Kernels are written once against the [`FixedVector`] trait and compile to
//! the backend selected by cargo features.
//!
//! # Features
//!
//! - **Trait-based lanes**: `FixedVector` for `i32` lanes, `WideVector` for
//!   their 64-bit companions
//! - **Compile-time backend selection**: scalar, `portable4` or `portable8`
//! - **Bit-exact backends**: every backend shares the primitives in [`ops`]
//! - **Typed Q formats**: [`Fixed`] with `Q31`, `Q30` and `Q6_25` aliases
//! - **No allocations**: all kernels work on caller-provided slices
//!
//! # Quick Start
//!
//! ```rust
//! use melfix_math::{DefaultFixedVector, FixedVector};
//! use melfix_math::math::log2_lanes;
//!
//! let mantissa = DefaultFixedVector::splat(1 << 30);
//! assert_eq!(log2_lanes(mantissa).horizontal_min(), i32::MIN);
//! ```

// Core trait definitions
pub mod traits;

// Backend implementations
pub mod backends;

// Scalar primitives shared by all backends
pub mod ops;

// Typed Q formats
pub mod fixed;

// Block floating-point helpers
pub mod block;

// Math kernels
pub mod math;

// Public re-exports for convenience
pub use traits::{FixedVector, LaneMask, WideVector};

pub use fixed::{Fixed, Q30, Q31, Q6_25};

pub use num_complex::Complex;

// Re-export backend types
pub use backends::portable::{Portable4, Portable8, PortableMask, PortableVector, PortableWide};
pub use backends::scalar::{ScalarMask, ScalarVector, ScalarWide};

/// Default vector type based on enabled feature
///
/// - no backend feature: `ScalarVector` (1 lane)
/// - `portable4` feature: `Portable4` (4 lanes)
/// - `portable8` feature: `Portable8` (8 lanes)
#[cfg(all(not(feature = "portable4"), not(feature = "portable8")))]
pub type DefaultFixedVector = ScalarVector;

/// Default vector type (four portable lanes)
#[cfg(all(feature = "portable4", not(feature = "portable8")))]
pub type DefaultFixedVector = Portable4;

/// Default vector type (eight portable lanes)
#[cfg(all(feature = "portable8", not(feature = "portable4")))]
pub type DefaultFixedVector = Portable8;

// Keeps the crate resolvable while backends/mod.rs reports the conflict
#[cfg(all(feature = "portable4", feature = "portable8"))]
pub type DefaultFixedVector = ScalarVector;
