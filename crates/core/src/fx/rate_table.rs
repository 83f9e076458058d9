//! Currency normalization against a single reporting currency.
//!
//! `to_reporting` is the single conversion primitive; every other module
//! routes currency conversion through it rather than touching raw rates.
//! `to_currency` exists only for alternate-currency display of net worth
//! and never feeds tax or scoring math.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::fx::FxError;
use crate::settings::Settings;

/// Lookup table of conversion factors into the reporting currency.
///
/// Keyed by bare currency code; each factor is "units of reporting
/// currency per 1 unit of that currency". The reporting currency itself
/// always converts at 1.
#[derive(Debug, Clone)]
pub struct RateTable {
    reporting_currency: String,
    rates: HashMap<String, Decimal>,
}

impl RateTable {
    pub fn new(reporting_currency: impl Into<String>, rates: HashMap<String, Decimal>) -> Self {
        Self {
            reporting_currency: reporting_currency.into(),
            rates,
        }
    }

    /// Builds the table from engine settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.reporting_currency.clone(),
            settings.exchange_rates.clone(),
        )
    }

    pub fn reporting_currency(&self) -> &str {
        &self.reporting_currency
    }

    /// Conversion factor for `currency` into the reporting currency.
    ///
    /// Returns 1 for the reporting currency itself, otherwise a table
    /// lookup. A missing entry is an error, never a silent 1.
    pub fn rate_for(&self, currency: &str) -> Result<Decimal, FxError> {
        if currency == self.reporting_currency {
            return Ok(Decimal::ONE);
        }
        let rate = self
            .rates
            .get(currency)
            .copied()
            .ok_or_else(|| FxError::MissingRate(currency.to_string()))?;
        if rate <= Decimal::ZERO {
            return Err(FxError::InvalidRate(currency.to_string()));
        }
        Ok(rate)
    }

    /// Converts an amount in `currency` into the reporting currency.
    pub fn to_reporting(&self, amount: Decimal, currency: &str) -> Result<Decimal, FxError> {
        Ok(amount * self.rate_for(currency)?)
    }

    /// Converts a reporting-currency amount into `target_currency`.
    ///
    /// Display-only: net worth shown in alternate currencies. Rounding
    /// from this path must not leak back into tax or scoring figures.
    pub fn to_currency(
        &self,
        reporting_amount: Decimal,
        target_currency: &str,
    ) -> Result<Decimal, FxError> {
        Ok(reporting_amount / self.rate_for(target_currency)?)
    }
}
