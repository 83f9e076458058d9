//! Quality score view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The portfolio's single largest position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LargestPosition {
    pub name: String,
    /// Share of total portfolio value, 0-100
    pub percentage: Decimal,
}

/// How spread out the portfolio is, via Herfindahl-Hirschman indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationReport {
    /// 0-100, higher is more diversified
    pub score: Decimal,
    /// Weighted-average HHI across the five axes, 0-10000
    pub weighted_hhi: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub largest_position: Option<LargestPosition>,
    pub holdings_count: usize,
}

/// How close the investible allocation sits to its targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReport {
    pub score: Decimal,
    pub total_drift: Decimal,
    pub max_drift: Decimal,
}

/// Liquidity buffer and defensive tilt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResilienceReport {
    pub score: Decimal,
    /// Liquid (cash, money market) share of total value, 0-100
    pub liquidity_ratio: Decimal,
    /// Defensive (bonds, cash, money market) share of total value, 0-100
    pub defensive_ratio: Decimal,
    /// Liquid value / monthly expenses; 0 when expenses are 0
    pub emergency_fund_months: Decimal,
}

/// Concentration-risk pressure on the portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    pub score: Decimal,
    pub risk_count: usize,
    /// Largest flagged single-asset share; 0 when none flagged
    pub max_single_asset_pct: Decimal,
    /// Largest flagged currency share; 0 when none flagged
    pub max_currency_pct: Decimal,
}

/// Priority of a recommendation, derived from its sub-score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
}

/// A directional suggestion for the weakest factor of a low sub-score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    /// Sub-score area: "Diversification", "Balance", "Resilience", "Risk"
    pub area: String,
    pub suggestion: String,
    pub priority: RecommendationPriority,
}

/// Composite portfolio quality report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScore {
    /// Fixed weighted average of the four sub-scores, 0-100
    pub overall: Decimal,
    /// Letter grade: >=90 A, >=75 B, >=60 C, >=40 D, else F
    pub grade: String,
    pub diversification: DiversificationReport,
    pub balance: BalanceReport,
    pub resilience: ResilienceReport,
    pub risk: RiskReport,
    /// Ordered by ascending sub-score, worst area first
    pub recommendations: Vec<Recommendation>,
}
