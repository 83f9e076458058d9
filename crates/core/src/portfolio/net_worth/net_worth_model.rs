//! Net worth view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Capital needed to fund annual expenses at one withdrawal rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalTarget {
    /// "conservative", "safe" or "aggressive"
    pub label: String,
    /// Withdrawal rate, percent per year
    pub withdrawal_rate_pct: Decimal,
    /// annual expenses / rate; 0 when the rate is 0
    pub required_capital: Decimal,
    /// Investible value as a share of the required capital, 0 when the
    /// required capital is 0
    pub progress_pct: Decimal,
}

/// Assets minus liabilities, with retirement capital targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetWorthSummary {
    /// Reporting currency of all figures below
    pub currency: String,
    pub total_assets: Decimal,
    pub total_liabilities: Decimal,
    pub net_worth: Decimal,
    pub capital_targets: Vec<CapitalTarget>,
}
