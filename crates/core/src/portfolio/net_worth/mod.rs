//! Net worth - assets minus liabilities, with capital targets.

mod net_worth_calculator;
mod net_worth_model;

pub use net_worth_calculator::{net_worth, net_worth_in};
pub use net_worth_model::{CapitalTarget, NetWorthSummary};
