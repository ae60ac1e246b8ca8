//! Measurement type errors.

use thiserror::Error;

/// Result type for measurement type operations.
pub type CountsResult<T> = Result<T, CountsError>;

/// Errors produced when building or converting measurement counts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CountsError {
    /// Total shot count is zero; probabilities are undefined.
    #[error("empty sample: total shot count is zero, probabilities are undefined")]
    EmptySample,

    /// An outcome key is not one of the four canonical bitstrings.
    #[error("invalid bitstring '{0}': expected one of 00, 01, 10, 11")]
    InvalidBitstring(String),
}
