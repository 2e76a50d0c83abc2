//! Log-mel pipeline
//!
//! [`LogMel`] owns the immutable filterbank and turns one Q31 complex
//! spectrum into `band_num` Q6.25 log energies:
//!
//! 1. restrict the spectrum to `bin_low..bin_upp`
//! 2. normalize the restricted block by its block exponent
//! 3. take the Q30 magnitude of every bin
//! 4. accumulate weighted band energies as `(mantissa, exponent)` pairs
//! 5. log-scale the energies into the output
//!
//! Every size check runs before step 1, so a failed call leaves the output
//! untouched. Working memory comes from the caller's scratch buffer.

use log::trace;
use melfix_math::block::{apply_shift_complex, block_exponent_complex};
use melfix_math::math::magnitude;
use melfix_math::{Complex, Q6_25};

use crate::config::LogMelParams;
use crate::error::LogMelError;
use crate::filterbank::FilterBank;
use crate::profile::{scoped, NoopProfiler, Profiler, Stage};
use crate::scaler::log_scale;
use crate::scratch::{ScratchArena, ScratchLayout};

/// Configured log-mel front end.
///
/// Immutable after construction; one instance may serve concurrent `process`
/// calls as long as each call has its own scratch buffer.
///
/// # Example
///
/// ```rust
/// use melfix_logmel::{LogMel, LogMelParams};
/// use melfix_math::{Complex, Q6_25};
///
/// let logmel = LogMel::new(LogMelParams::default())?;
/// let mut scratch = vec![0u8; logmel.scratch_size()];
/// let mut output = vec![Q6_25::ZERO; logmel.band_num()];
/// let spectrum = vec![Complex::new(0, 0); logmel.spectrum_len()];
///
/// logmel.process(&mut scratch, &mut output, &spectrum, 15)?;
/// assert!(output.iter().all(|v| *v == Q6_25::ZERO));
/// # Ok::<(), melfix_logmel::LogMelError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LogMel {
    params: LogMelParams,
    bank: FilterBank,
    layout: ScratchLayout,
}

impl LogMel {
    /// Validate `params` and build the filterbank tables.
    pub fn new(params: LogMelParams) -> Result<Self, LogMelError> {
        let bank = FilterBank::design(&params)?;
        let layout = ScratchLayout::new(bank.bin_count(), bank.band_num());
        Ok(Self {
            params,
            bank,
            layout,
        })
    }

    /// Parameters this instance was built from
    pub fn params(&self) -> &LogMelParams {
        &self.params
    }

    /// Filterbank tables
    pub fn filterbank(&self) -> &FilterBank {
        &self.bank
    }

    /// Number of output bands
    pub fn band_num(&self) -> usize {
        self.bank.band_num()
    }

    /// Number of spectrum bins `process` expects
    pub fn spectrum_len(&self) -> usize {
        self.params.spectrum_len()
    }

    /// First bin read from the spectrum
    pub fn bin_low(&self) -> usize {
        self.bank.bin_low()
    }

    /// One past the last bin read from the spectrum
    pub fn bin_upp(&self) -> usize {
        self.bank.bin_upp()
    }

    /// Scratch regions used by `process`
    pub fn scratch_layout(&self) -> ScratchLayout {
        self.layout
    }

    /// Scratch bytes `process` needs, for a buffer at any address
    pub fn scratch_size(&self) -> usize {
        self.layout.size()
    }

    /// Compute log-mel energies of `spectrum`.
    ///
    /// `spectrum` holds `fft_size / 2 + 1` Q31 bins whose true values are
    /// `bin·2^scale_exp`. For a full-scale Q31 time signal, `scale_exp` is 15
    /// plus the total right shift applied inside the FFT.
    pub fn process(
        &self,
        scratch: &mut [u8],
        output: &mut [Q6_25],
        spectrum: &[Complex<i32>],
        scale_exp: i32,
    ) -> Result<(), LogMelError> {
        self.process_with_profiler(scratch, output, spectrum, scale_exp, &mut NoopProfiler)
    }

    /// [`process`](Self::process), reporting each stage to `profiler`.
    pub fn process_with_profiler<P: Profiler>(
        &self,
        scratch: &mut [u8],
        output: &mut [Q6_25],
        spectrum: &[Complex<i32>],
        scale_exp: i32,
        profiler: &mut P,
    ) -> Result<(), LogMelError> {
        self.check_sizes(scratch.len(), output.len(), spectrum.len())?;

        let bins = self.bank.bin_count();
        let bands = self.bank.band_num();
        let too_small = LogMelError::ScratchTooSmall {
            required: self.scratch_size(),
            provided: scratch.len(),
        };

        let mut arena = ScratchArena::new(scratch);
        let normalized = arena.alloc::<Complex<i32>>(bins).ok_or(too_small)?;
        let magnitudes = arena.alloc::<i32>(bins).ok_or(too_small)?;
        let mantissas = arena.alloc::<i32>(bands).ok_or(too_small)?;
        let exponents = arena.alloc::<i16>(bands).ok_or(too_small)?;

        let bank = &self.bank;
        let restricted = scoped(profiler, Stage::Restrict, move || {
            &spectrum[bank.bin_low()..bank.bin_upp()]
        });

        let nsa = scoped(profiler, Stage::Normalize, || {
            let nsa = block_exponent_complex(restricted);
            apply_shift_complex(normalized, restricted, nsa as i32);
            nsa
        });
        let spec_exp = scale_exp.saturating_sub(nsa as i32);
        trace!(
            "logmel: block exponent {} spec_exp {} scratch {} bytes",
            nsa,
            spec_exp,
            arena.used()
        );

        scoped(profiler, Stage::Magnitude, || magnitude(normalized, magnitudes));

        scoped(profiler, Stage::Filterbank, || {
            self.bank.accumulate(magnitudes, spec_exp, mantissas, exponents)
        });

        scoped(profiler, Stage::LogScale, || {
            log_scale(mantissas, exponents, self.params.base10, output)
        });

        Ok(())
    }

    fn check_sizes(&self, scratch: usize, output: usize, spectrum: usize) -> Result<(), LogMelError> {
        if spectrum != self.spectrum_len() {
            return Err(LogMelError::SpectrumLengthMismatch {
                expected: self.spectrum_len(),
                actual: spectrum,
            });
        }
        if output != self.band_num() {
            return Err(LogMelError::OutputLengthMismatch {
                expected: self.band_num(),
                actual: output,
            });
        }
        if scratch < self.scratch_size() {
            return Err(LogMelError::ScratchTooSmall {
                required: self.scratch_size(),
                provided: scratch,
            });
        }
        Ok(())
    }
}
