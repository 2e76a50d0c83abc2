//! Fixed-point math kernels
//!
//! Vectorized kernels written against [`FixedVector`](crate::FixedVector) so
//! they run on every backend with bit-identical results. Each kernel has a
//! lane-level form, a single-value form and a slice driver that processes
//! whole vectors followed by a scalar tail.
//!
//! # Modules
//!
//! - `magnitude`: complex modulus, Q31 components to Q30
//! - `log2`: base-2 logarithm of Q31 mantissas in `[0.5, 1)`
//!
//! # Example
//!
//! ```rust
//! use melfix_math::math::{log2, magnitude};
//! use melfix_math::Complex;
//!
//! let spectrum = [Complex::new(3 << 26, 4 << 26), Complex::new(0, 0)];
//! let mut mags = [0i32; 2];
//! magnitude(&spectrum, &mut mags);
//!
//! let mantissas = [1 << 30, i32::MAX];
//! let mut logs = [0i32; 2];
//! log2(&mantissas, &mut logs);
//! assert_eq!(logs, [i32::MIN, -1]);
//! ```

pub mod log2;
pub mod magnitude;

pub use self::log2::{log2, log2_lanes, log2_scalar, log2_with};
pub use self::magnitude::{magnitude, magnitude_lanes, magnitude_scalar, magnitude_with};
