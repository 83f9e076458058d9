//! Engine configuration supplied by the boundary layer.
//!
//! The rate table is keyed by bare currency code; legacy `"USD/ZAR"`
//! pair-string keys must be normalized by the boundary layer before the
//! settings reach the engine.

use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::assets::AssetClass;

/// Concentration and drift limits, all in percent.
///
/// Boundary semantics are strictly-greater-than everywhere: a figure
/// exactly at its threshold is not flagged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thresholds {
    /// Max share of the portfolio for a single asset
    pub single_asset_pct: Decimal,
    /// Max share for one asset class
    pub asset_class_pct: Decimal,
    /// Max share for one currency
    pub currency_pct: Decimal,
    /// Drift above this is medium urgency
    pub drift_low_pct: Decimal,
    /// Drift above this is high urgency
    pub drift_high_pct: Decimal,
    /// Drift above this triggers a rebalancing action; typically larger
    /// than `drift_low_pct`
    pub rebalance_drift_pct: Decimal,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            single_asset_pct: dec!(15),
            asset_class_pct: dec!(40),
            currency_pct: dec!(70),
            drift_low_pct: dec!(3),
            drift_high_pct: dec!(8),
            rebalance_drift_pct: dec!(5),
        }
    }
}

/// Safe-withdrawal-rate bands, in percent per year.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRates {
    pub conservative: Decimal,
    pub safe: Decimal,
    pub aggressive: Decimal,
}

impl Default for WithdrawalRates {
    fn default() -> Self {
        Self {
            conservative: dec!(3),
            safe: dec!(4),
            aggressive: dec!(5),
        }
    }
}

/// Tax and spending profile of the investor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Marginal income tax rate, 0-100
    pub marginal_tax_rate: Decimal,
    /// Annual living expenses in the reporting currency
    pub annual_expenses: Decimal,
}

/// Full engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// ISO code all cross-asset totals are normalized into
    pub reporting_currency: String,
    /// Currency code -> units of reporting currency per 1 unit.
    /// The reporting currency itself maps to 1.
    pub exchange_rates: HashMap<String, Decimal>,
    pub thresholds: Thresholds,
    /// Target percentage of investible assets per class. Classes held but
    /// absent here are implicitly targeted at 0%.
    pub target_allocation: HashMap<AssetClass, Decimal>,
    pub withdrawal_rates: WithdrawalRates,
    pub profile: Profile,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reporting_currency: "ZAR".to_string(),
            exchange_rates: HashMap::new(),
            thresholds: Thresholds::default(),
            target_allocation: HashMap::new(),
            withdrawal_rates: WithdrawalRates::default(),
            profile: Profile::default(),
        }
    }
}
