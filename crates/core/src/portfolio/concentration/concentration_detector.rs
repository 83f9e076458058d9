//! Flags single-asset, asset-class and currency concentration above the
//! configured limits.
//!
//! Boundary semantics: a share strictly greater than its threshold is
//! flagged; a share exactly at the threshold is not. An empty result
//! means "evaluated and clean", which is distinct from not evaluating
//! at all (that path returns an error instead).

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::Asset;
use crate::errors::Result;
use crate::fx::RateTable;
use crate::portfolio::valuation::{asset_value, group_totals, total_value, Dimension};
use crate::settings::Thresholds;

use super::{ConcentrationRisk, RiskSeverity, RiskType};

/// Critical when the excess over the threshold is more than 1.5x the
/// threshold itself, i.e. the share exceeds 2.5x the limit.
fn severity_for(percentage: Decimal, threshold: Decimal) -> RiskSeverity {
    if percentage - threshold > threshold * dec!(1.5) {
        RiskSeverity::Critical
    } else {
        RiskSeverity::Warning
    }
}

/// Detects concentration risks across all three axes.
///
/// Output ordering is fixed for determinism: single-asset risks first,
/// then asset-class, then currency, each by descending percentage.
pub fn detect(
    assets: &[Asset],
    rates: &RateTable,
    thresholds: &Thresholds,
) -> Result<Vec<ConcentrationRisk>> {
    let total = total_value(assets, rates)?;
    if total.is_zero() {
        debug!("Zero portfolio value, concentration check is trivially clean");
        return Ok(Vec::new());
    }

    let mut risks: Vec<ConcentrationRisk> = Vec::new();

    // 1. Per-asset share of the whole portfolio
    let mut asset_risks: Vec<ConcentrationRisk> = Vec::new();
    for asset in assets {
        let percentage = asset_value(asset, rates)? / total * dec!(100);
        if percentage > thresholds.single_asset_pct {
            asset_risks.push(ConcentrationRisk {
                risk_type: RiskType::SingleAsset,
                name: asset.name.clone(),
                percentage,
                severity: severity_for(percentage, thresholds.single_asset_pct),
            });
        }
    }
    asset_risks.sort_by(|a, b| {
        b.percentage
            .cmp(&a.percentage)
            .then_with(|| a.name.cmp(&b.name))
    });
    risks.extend(asset_risks);

    // 2. Per-asset-class share
    risks.extend(axis_risks(
        assets,
        rates,
        Dimension::AssetClass,
        RiskType::AssetClass,
        thresholds.asset_class_pct,
        total,
    )?);

    // 3. Per-currency share
    risks.extend(axis_risks(
        assets,
        rates,
        Dimension::Currency,
        RiskType::Currency,
        thresholds.currency_pct,
        total,
    )?);

    debug!("Flagged {} concentration risks", risks.len());
    Ok(risks)
}

fn axis_risks(
    assets: &[Asset],
    rates: &RateTable,
    dimension: Dimension,
    risk_type: RiskType,
    threshold: Decimal,
    total: Decimal,
) -> Result<Vec<ConcentrationRisk>> {
    // group_totals is already sorted by descending value, so flagged
    // risks come out by descending percentage
    Ok(group_totals(assets, rates, dimension)?
        .into_iter()
        .filter_map(|group| {
            let percentage = group.value / total * dec!(100);
            if percentage > threshold {
                Some(ConcentrationRisk {
                    risk_type,
                    name: group.name,
                    percentage,
                    severity: severity_for(percentage, threshold),
                })
            } else {
                None
            }
        })
        .collect())
}
