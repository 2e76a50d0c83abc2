//! Profiling hooks
//!
//! `process` reports when it enters and leaves each stage. The default
//! [`NoopProfiler`] compiles away; supply your own [`Profiler`] to time the
//! stages or count calls.

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Slice the spectrum to the filterbank bin range
    Restrict,
    /// Block exponent and shift
    Normalize,
    /// Complex magnitude
    Magnitude,
    /// Weighted band energies
    Filterbank,
    /// Logarithm and base conversion
    LogScale,
}

impl Stage {
    /// All stages in execution order
    pub const ALL: [Stage; 5] = [
        Stage::Restrict,
        Stage::Normalize,
        Stage::Magnitude,
        Stage::Filterbank,
        Stage::LogScale,
    ];
}

/// Receiver for stage boundaries.
pub trait Profiler {
    /// Called before a stage runs
    fn enter(&mut self, _stage: Stage) {}

    /// Called after a stage completes
    fn exit(&mut self, _stage: Stage) {}
}

/// Profiler that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProfiler;

impl Profiler for NoopProfiler {}

impl<P: Profiler + ?Sized> Profiler for &mut P {
    #[inline]
    fn enter(&mut self, stage: Stage) {
        (**self).enter(stage)
    }

    #[inline]
    fn exit(&mut self, stage: Stage) {
        (**self).exit(stage)
    }
}

/// Run `f` between `enter` and `exit` for `stage`.
#[inline(always)]
pub(crate) fn scoped<P: Profiler, R>(profiler: &mut P, stage: Stage, f: impl FnOnce() -> R) -> R {
    profiler.enter(stage);
    let out = f();
    profiler.exit(stage);
    out
}
