#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! melfix-logmel: log-mel filterbank energies in fixed point
//!
//! # Features
//!
//! - **Filterbank design**: HTK or auditory-toolbox mel spacing, unit-peak or
//!   unit-area triangles, computed once at construction
//! - **Allocation-free processing**: `process` works inside a caller-provided
//!   scratch buffer sized by `scratch_size()`
//! - **Typed output**: `Q6_25` values, natural log or log10
//! - **Profiling hooks**: optional per-stage callbacks via [`Profiler`]
//!
//! # Quick Start
//!
//! ```rust
//! use melfix_logmel::{LogMel, LogMelParams, MelScale};
//!
//! let params = LogMelParams {
//!     mel_scale: MelScale::AuditoryToolbox,
//!     band_num: 40,
//!     ..Default::default()
//! };
//! let logmel = LogMel::new(params)?;
//! assert_eq!(logmel.band_num(), 40);
//! assert!(logmel.scratch_size() > 0);
//! # Ok::<(), melfix_logmel::LogMelError>(())
//! ```

extern crate alloc;

// Parameters and validation
pub mod config;
pub mod error;
pub mod mel;

// Filterbank design and energy accumulation
pub mod filterbank;

// Log-domain conversion
pub mod scaler;

// Scratch memory and profiling
pub mod profile;
pub mod scratch;

// Orchestration
pub mod pipeline;

pub use config::{FilterNormalization, LogMelParams, MAX_BANDS, MIN_BANDS};
pub use error::{ErrorCode, LogMelError};
pub use filterbank::{BandScale, FilterBank};
pub use mel::MelScale;
pub use pipeline::LogMel;
pub use profile::{NoopProfiler, Profiler, Stage};
pub use scratch::{ScratchArena, ScratchLayout, SCRATCH_ALIGN};
