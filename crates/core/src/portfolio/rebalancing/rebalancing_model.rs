//! Rebalancing view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::AssetClass;
use crate::portfolio::allocation::Urgency;

/// Direction of a rebalancing trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeDirection {
    Buy,
    Sell,
}

/// One buy or sell needed to steer a class back to its target.
///
/// Sells name a specific asset; buys apply to the class as a whole,
/// leaving instrument selection to the investor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalancingAction {
    pub asset_class: AssetClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_name: Option<String>,
    pub direction: TradeDirection,
    /// Trade size in the reporting currency
    pub amount: Decimal,
    /// Zero for buys, TFSA holdings and non-positive gains
    pub estimated_cgt: Decimal,
    /// The class's drift urgency
    pub urgency: Urgency,
}

/// Plan-level counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalancingSummary {
    pub total_actions: usize,
    pub high_priority_count: usize,
}

/// Full advice output: actions plus total tax cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebalancingPlan {
    /// Sells first, then buys, each by descending amount
    pub actions: Vec<RebalancingAction>,
    /// Sum of estimated CGT over all sell actions
    pub total_tax_impact: Decimal,
    pub summary: RebalancingSummary,
}

impl RebalancingPlan {
    pub fn empty() -> Self {
        Self {
            actions: Vec::new(),
            total_tax_impact: Decimal::ZERO,
            summary: RebalancingSummary {
                total_actions: 0,
                high_priority_count: 0,
            },
        }
    }
}
