//! Vector backend implementations
//!
//! Backends are selected at compile time via cargo features. Only one backend
//! is the default per build; all of them stay available for direct use.

// Scalar backend (always the fallback)
pub mod scalar;

// Portable lane-array backend
pub mod portable;

#[cfg(all(feature = "portable4", feature = "portable8"))]
compile_error!(
    "Cannot enable both portable4 and portable8 features simultaneously. Choose one backend."
);
