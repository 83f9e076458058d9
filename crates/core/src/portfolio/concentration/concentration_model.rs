//! Concentration risk view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The axis on which a concentration was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskType {
    SingleAsset,
    AssetClass,
    Currency,
}

impl RiskType {
    pub fn label(&self) -> &'static str {
        match self {
            RiskType::SingleAsset => "Single Asset",
            RiskType::AssetClass => "Asset Class",
            RiskType::Currency => "Currency",
        }
    }
}

impl std::fmt::Display for RiskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Severity of a flagged concentration.
///
/// Ordered so that `Warning < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskSeverity {
    Warning,
    Critical,
}

/// One holding, class or currency sitting above its configured limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConcentrationRisk {
    pub risk_type: RiskType,
    /// Asset name, class label or currency code
    pub name: String,
    /// Share of total portfolio value, 0-100
    pub percentage: Decimal,
    pub severity: RiskSeverity,
}
