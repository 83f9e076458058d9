//! Allocation engine - percentage breakdowns and target drift.

mod allocation_model;
mod allocation_service;

pub use allocation_model::{AllocationEntry, DriftEntry, DriftReport, Urgency};
pub use allocation_service::{allocation, drift_report, urgency_for};
