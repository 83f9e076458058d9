//! Concentration risk detector - single-asset, class and currency limits.

mod concentration_detector;
mod concentration_model;

pub use concentration_detector::detect;
pub use concentration_model::{ConcentrationRisk, RiskSeverity, RiskType};
