//! Estimator error types.

use thiserror::Error;

use bellphase_types::CountsError;

/// Result type for estimator operations.
pub type EstResult<T> = Result<T, EstError>;

/// Errors that can occur while processing measurement samples.
///
/// Out-of-domain phase estimates are NOT errors: they are carried in the
/// record as `phi_hat = None` (see [`crate::PhaseEstimate`]).
#[derive(Debug, Error)]
pub enum EstError {
    /// Malformed or empty measurement counts.
    #[error(transparent)]
    Counts(#[from] CountsError),

    /// I/O error reading samples or writing output.
    #[error("I/O error: {0}")]
    Io(String),

    /// Sample file could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Report serialization failed.
    #[error("export error: {0}")]
    Export(String),
}
