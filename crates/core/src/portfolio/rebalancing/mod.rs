//! Rebalancing advisor - drift-correcting trades with CGT estimates.

mod rebalancing_advisor;
mod rebalancing_model;

pub use rebalancing_advisor::rebalancing_plan;
pub use rebalancing_model::{
    RebalancingAction, RebalancingPlan, RebalancingSummary, TradeDirection,
};
