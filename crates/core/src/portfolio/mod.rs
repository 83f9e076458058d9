//! Portfolio analytics - valuation, allocation, risk, scoring, advice.

pub mod allocation;
pub mod concentration;
pub mod net_worth;
pub mod rebalancing;
pub mod scoring;
pub mod valuation;
