//! Frequency to mel mappings.

/// Mel scale variant used to place the filterbank corner frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MelScale {
    /// HTK: `2595·log10(1 + f/700)`
    #[default]
    Htk,
    /// Auditory toolbox (Slaney): linear below 1 kHz, logarithmic above
    AuditoryToolbox,
}

// Auditory toolbox constants
const SLANEY_F_SP: f64 = 200.0 / 3.0;
const SLANEY_MIN_LOG_HZ: f64 = 1000.0;
const SLANEY_MIN_LOG_MEL: f64 = 15.0;
const SLANEY_LOGSTEP: f64 = 0.068_751_777_420_949_12; // ln(6.4) / 27

impl MelScale {
    /// Convert a frequency in Hz to mels.
    pub fn hz_to_mel(self, hz: f64) -> f64 {
        match self {
            Self::Htk => 2595.0 * libm::log10(1.0 + hz / 700.0),
            Self::AuditoryToolbox => {
                if hz < SLANEY_MIN_LOG_HZ {
                    hz / SLANEY_F_SP
                } else {
                    SLANEY_MIN_LOG_MEL + libm::log(hz / SLANEY_MIN_LOG_HZ) / SLANEY_LOGSTEP
                }
            }
        }
    }

    /// Convert mels back to Hz.
    pub fn mel_to_hz(self, mel: f64) -> f64 {
        match self {
            Self::Htk => 700.0 * (libm::pow(10.0, mel / 2595.0) - 1.0),
            Self::AuditoryToolbox => {
                if mel < SLANEY_MIN_LOG_MEL {
                    mel * SLANEY_F_SP
                } else {
                    SLANEY_MIN_LOG_HZ * libm::exp((mel - SLANEY_MIN_LOG_MEL) * SLANEY_LOGSTEP)
                }
            }
        }
    }
}
