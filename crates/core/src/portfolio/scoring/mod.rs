//! Portfolio quality scorer - composite score, grade and recommendations.

mod scoring_model;
mod scoring_service;

pub use scoring_model::{
    BalanceReport, DiversificationReport, LargestPosition, QualityScore, Recommendation,
    RecommendationPriority, ResilienceReport, RiskReport,
};
pub use scoring_service::{
    balance_score, diversification_score, grade_for, quality_score, resilience_score, risk_score,
};
