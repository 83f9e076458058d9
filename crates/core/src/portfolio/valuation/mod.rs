//! Valuation & aggregation - per-asset figures and grouped totals.

mod valuation_calculator;
mod valuation_model;

pub use valuation_calculator::{
    asset_value, cost_basis, group_totals, investible_split, total_value, valuate,
};
pub use valuation_model::{AssetValuation, Dimension, GroupTotal, InvestibleSplit};
