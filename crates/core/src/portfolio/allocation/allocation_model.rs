//! Allocation and drift view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetClass;

/// Share of one group within a dimension breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationEntry {
    pub name: String,
    /// Value in the reporting currency
    pub value: Decimal,
    /// 0-100; zero for every entry when the group total is zero
    pub percentage: Decimal,
}

/// How far one asset class sits from its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftEntry {
    pub asset_class: AssetClass,
    /// Actual share of investible value, 0-100
    pub actual_pct: Decimal,
    /// Target share; classes absent from the target map carry 0
    pub target_pct: Decimal,
    /// actual - target; positive means overweight
    pub drift: Decimal,
}

/// Urgency band derived from drift magnitude.
///
/// Ordered so that `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    #[default]
    Low,
    Medium,
    High,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "LOW",
            Urgency::Medium => "MEDIUM",
            Urgency::High => "HIGH",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Actual-vs-target comparison over every relevant asset class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriftReport {
    /// Sorted by descending |drift|, ties by class label
    pub entries: Vec<DriftEntry>,
    /// Sum of |drift| over all classes
    pub total_drift: Decimal,
    /// Largest single |drift|
    pub max_drift: Decimal,
    pub urgency: Urgency,
}

impl DriftReport {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            total_drift: Decimal::ZERO,
            max_drift: Decimal::ZERO,
            urgency: Urgency::Low,
        }
    }
}
