//! Core error types for the analytics engine.
//!
//! The engine never retries and never partially succeeds: a single
//! malformed input aborts the whole report with a named error so the
//! caller can decide whether to fall back or surface a message.

use thiserror::Error;

use crate::fx::FxError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Fx error: {0}")]
    Fx(#[from] FxError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for input records.
///
/// Malformed records are rejected at the engine boundary; arithmetic
/// inside the engine assumes they never get through. Divide-by-zero
/// situations (zero total value, zero cost basis, zero annual expenses)
/// are not errors and resolve to zero where they occur.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid asset '{id}': {reason}")]
    InvalidAsset { id: String, reason: String },

    #[error("Invalid liability '{id}': {reason}")]
    InvalidLiability { id: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::Validation(ValidationError::InvalidAsset {
            id: "asset-1".to_string(),
            reason: "units cannot be negative".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "Input validation failed: Invalid asset 'asset-1': units cannot be negative"
        );

        let err = Error::Fx(FxError::MissingRate("USD".to_string()));
        assert_eq!(
            err.to_string(),
            "Fx error: No exchange rate for currency 'USD'"
        );
    }
}
