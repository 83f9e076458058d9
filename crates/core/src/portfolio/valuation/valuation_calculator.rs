//! Pure valuation and aggregation functions.
//!
//! Everything here reduces in a stable, documented order (input order for
//! per-asset figures, `BTreeMap` key order for grouped sums) so identical
//! inputs always yield identical outputs.

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::{Asset, AssetType};
use crate::errors::Result;
use crate::fx::RateTable;

use super::{AssetValuation, Dimension, GroupTotal, InvestibleSplit};

/// Market value of one asset in the reporting currency.
pub fn asset_value(asset: &Asset, rates: &RateTable) -> Result<Decimal> {
    Ok(rates.to_reporting(asset.units * asset.current_price, &asset.currency)?)
}

/// Cost basis of one asset in the reporting currency.
pub fn cost_basis(asset: &Asset, rates: &RateTable) -> Result<Decimal> {
    Ok(rates.to_reporting(asset.units * asset.cost_price, &asset.currency)?)
}

/// Per-asset value and gain figures, in input order.
pub fn valuate(assets: &[Asset], rates: &RateTable) -> Result<Vec<AssetValuation>> {
    debug!(
        "Valuating {} assets in {}",
        assets.len(),
        rates.reporting_currency()
    );

    assets
        .iter()
        .map(|asset| {
            let value = asset_value(asset, rates)?;
            let cost = cost_basis(asset, rates)?;
            let gain = value - cost;
            // Zero cost basis (newly added, unpriced) yields 0%, not NaN
            let gain_percentage = if cost.is_zero() {
                Decimal::ZERO
            } else {
                gain / cost * dec!(100)
            };
            Ok(AssetValuation {
                asset_id: asset.id.clone(),
                name: asset.name.clone(),
                asset_class: asset.asset_class.clone(),
                currency: asset.currency.clone(),
                value,
                cost_basis: cost,
                unrealized_gain: gain,
                gain_percentage,
            })
        })
        .collect()
}

/// Total portfolio value in the reporting currency.
pub fn total_value(assets: &[Asset], rates: &RateTable) -> Result<Decimal> {
    let mut total = Decimal::ZERO;
    for asset in assets {
        total += asset_value(asset, rates)?;
    }
    Ok(total)
}

/// Sums value and item count per group along the chosen dimension.
/// Sorted by descending value, ties alphabetical by name.
pub fn group_totals(
    assets: &[Asset],
    rates: &RateTable,
    dimension: Dimension,
) -> Result<Vec<GroupTotal>> {
    let mut groups: BTreeMap<String, (Decimal, usize)> = BTreeMap::new();
    for asset in assets {
        let key = dimension.key_of(asset);
        let value = asset_value(asset, rates)?;
        let entry = groups.entry(key).or_insert((Decimal::ZERO, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    let mut totals: Vec<GroupTotal> = groups
        .into_iter()
        .map(|(name, (value, count))| GroupTotal { name, value, count })
        .collect();
    totals.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.name.cmp(&b.name)));
    Ok(totals)
}

/// Partitions total value by `AssetType`. The two buckets always sum to
/// the portfolio total with no double counting.
pub fn investible_split(assets: &[Asset], rates: &RateTable) -> Result<InvestibleSplit> {
    let mut investible = Decimal::ZERO;
    let mut non_investible = Decimal::ZERO;
    for asset in assets {
        let value = asset_value(asset, rates)?;
        match asset.asset_type {
            AssetType::Investible => investible += value,
            AssetType::NonInvestible => non_investible += value,
        }
    }
    Ok(InvestibleSplit {
        investible,
        non_investible,
        total: investible + non_investible,
    })
}
