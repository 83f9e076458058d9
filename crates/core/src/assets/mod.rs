//! Asset domain - holdings and liabilities as immutable snapshot records.

mod assets_model;

pub use assets_model::{AccountType, Asset, AssetClass, AssetType, Liability};
