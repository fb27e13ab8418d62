use thiserror::Error;

/// Configuration rejected at construction time.
///
/// `update` never fails; everything that can be checked is checked here,
/// once, before a stage enters the loop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("FIR filter needs at least one tap")]
    EmptyTaps,

    #[error("state-space filter needs at least one state")]
    EmptyState,

    #[error("{what} has length {found}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("time step must be finite and > 0, got {0}")]
    InvalidTimeStep(f64),

    #[error("frequency {frequency} Hz outside (0, {limit}) Hz")]
    InvalidFrequency { frequency: f64, limit: f64 },

    #[error("sample rate must be finite and > 0, got {0}")]
    InvalidSampleRate(f64),

    #[error("quality factor must be finite and > 0, got {0}")]
    InvalidQuality(f64),
}
