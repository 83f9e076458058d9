//! Engine settings - reporting currency, rate table, thresholds, targets.

mod settings_model;

pub use settings_model::{Profile, Settings, Thresholds, WithdrawalRates};
