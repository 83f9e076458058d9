//! Valuation view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::{Asset, AssetClass};
use crate::constants::UNCATEGORIZED;

/// Per-asset value and gain figures in the reporting currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetValuation {
    pub asset_id: String,
    pub name: String,
    pub asset_class: AssetClass,
    /// Native currency of the underlying asset
    pub currency: String,
    pub value: Decimal,
    pub cost_basis: Decimal,
    pub unrealized_gain: Decimal,
    /// Zero when the cost basis is zero
    pub gain_percentage: Decimal,
}

/// Summed value and item count for one group of a dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupTotal {
    pub name: String,
    pub value: Decimal,
    pub count: usize,
}

/// Exact partition of total asset value by `AssetType`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestibleSplit {
    pub investible: Decimal,
    pub non_investible: Decimal,
    pub total: Decimal,
}

/// Grouping axis for aggregation and allocation breakdowns.
///
/// A single generic aggregation is parameterized by this enum's key
/// extractor instead of duplicating the grouping logic per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    AssetClass,
    Currency,
    Region,
    Sector,
    Platform,
    AssetType,
}

impl Dimension {
    /// All grouping axes, in display order.
    pub const ALL: [Dimension; 6] = [
        Dimension::AssetClass,
        Dimension::Currency,
        Dimension::Region,
        Dimension::Sector,
        Dimension::Platform,
        Dimension::AssetType,
    ];

    /// Extracts the grouping key for an asset along this dimension.
    /// Empty or missing classification strings land in "Uncategorized"
    /// instead of being dropped.
    pub fn key_of(&self, asset: &Asset) -> String {
        match self {
            Dimension::AssetClass => asset.asset_class.label().to_string(),
            Dimension::Currency => asset.currency.clone(),
            Dimension::Region => classification_key(asset.region.as_deref()),
            Dimension::Sector => classification_key(asset.sector.as_deref()),
            Dimension::Platform => classification_key(asset.platform.as_deref()),
            Dimension::AssetType => asset.asset_type.label().to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Dimension::AssetClass => "Asset Class",
            Dimension::Currency => "Currency",
            Dimension::Region => "Region",
            Dimension::Sector => "Sector",
            Dimension::Platform => "Platform",
            Dimension::AssetType => "Asset Type",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn classification_key(value: Option<&str>) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s.to_string(),
        _ => UNCATEGORIZED.to_string(),
    }
}
