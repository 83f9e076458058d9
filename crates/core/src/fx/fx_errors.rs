//! FX error types.

use thiserror::Error;

/// Errors from currency conversion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FxError {
    /// A referenced currency has no entry in the rate table. Fatal to the
    /// computation path; never defaulted to 1 silently.
    #[error("No exchange rate for currency '{0}'")]
    MissingRate(String),

    /// The rate table carries a zero or negative factor for a currency.
    #[error("Invalid exchange rate for currency '{0}'")]
    InvalidRate(String),
}
