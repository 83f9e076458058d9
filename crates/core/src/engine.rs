//! Single-pass analytics over a portfolio snapshot.
//!
//! `analyze` is the function-call boundary the surrounding application
//! invokes on every change to assets, liabilities or settings. It borrows
//! the inputs, never mutates them, performs no I/O and keeps no state
//! between calls, so identical snapshots always produce identical
//! reports. Malformed input aborts the whole report with a named error;
//! there is no partial success.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::assets::{Asset, Liability};
use crate::errors::Result;
use crate::fx::RateTable;
use crate::portfolio::allocation::{allocation, drift_report, AllocationEntry, DriftReport};
use crate::portfolio::concentration::{detect, ConcentrationRisk};
use crate::portfolio::net_worth::{net_worth, NetWorthSummary};
use crate::portfolio::rebalancing::{rebalancing_plan, RebalancingPlan};
use crate::portfolio::scoring::{quality_score, QualityScore};
use crate::portfolio::valuation::{
    investible_split, valuate, AssetValuation, Dimension, InvestibleSplit,
};
use crate::settings::Settings;

/// Allocation breakdown along one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionAllocation {
    pub dimension: Dimension,
    pub entries: Vec<AllocationEntry>,
}

/// Everything the UI layer consumes, produced in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub valuations: Vec<AssetValuation>,
    pub investible_split: InvestibleSplit,
    pub net_worth: NetWorthSummary,
    /// One breakdown per dimension, in `Dimension::ALL` order
    pub allocations: Vec<DimensionAllocation>,
    pub drift: DriftReport,
    pub concentration_risks: Vec<ConcentrationRisk>,
    pub quality: QualityScore,
    pub rebalancing: RebalancingPlan,
}

/// Runs the full analytics pass over a snapshot.
pub fn analyze(
    assets: &[Asset],
    liabilities: &[Liability],
    settings: &Settings,
) -> Result<PortfolioReport> {
    debug!(
        "Analyzing snapshot: {} assets, {} liabilities",
        assets.len(),
        liabilities.len()
    );

    // Boundary validation; arithmetic below assumes clean records
    for asset in assets {
        asset.validate()?;
    }
    for liability in liabilities {
        liability.validate()?;
    }

    let rates = RateTable::from_settings(settings);

    let valuations = valuate(assets, &rates)?;
    let split = investible_split(assets, &rates)?;
    let worth = net_worth(assets, liabilities, &rates, settings)?;

    let mut allocations = Vec::with_capacity(Dimension::ALL.len());
    for dimension in Dimension::ALL {
        allocations.push(DimensionAllocation {
            dimension,
            entries: allocation(assets, &rates, dimension)?,
        });
    }

    let drift = drift_report(assets, &rates, settings)?;
    let risks = detect(assets, &rates, &settings.thresholds)?;
    let quality = quality_score(assets, &rates, settings)?;
    let rebalancing = rebalancing_plan(assets, &rates, settings)?;

    Ok(PortfolioReport {
        valuations,
        investible_split: split,
        net_worth: worth,
        allocations,
        drift,
        concentration_risks: risks,
        quality,
        rebalancing,
    })
}
