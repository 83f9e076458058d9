//! FX (Foreign Exchange) module - currency normalization.

mod fx_errors;
mod rate_table;

pub use fx_errors::FxError;
pub use rate_table::RateTable;
