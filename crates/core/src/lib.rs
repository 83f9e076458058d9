//! Nestegg Core - the portfolio analytics engine.
//!
//! A pure computation layer for a personal-finance planner: given an
//! immutable snapshot of holdings, liabilities and settings it produces
//! multi-currency valuations, allocation breakdowns, concentration
//! risks, a composite quality score and tax-aware rebalancing advice.
//! It never mutates its inputs and performs no I/O; persistence, import
//! and UI concerns live in the surrounding application.

pub mod assets;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod fx;
pub mod portfolio;
pub mod settings;

// Re-export the engine boundary and common types
pub use engine::{analyze, DimensionAllocation, PortfolioReport};
pub use errors::{Error, Result};
