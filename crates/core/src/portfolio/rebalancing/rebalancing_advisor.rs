//! Tax-aware rebalancing advice.
//!
//! For every asset class drifted beyond the rebalancing threshold the
//! advisor emits trades that close the gap exactly to target. Sell
//! candidates within an overweight class are picked to minimize the tax
//! triggered: taxable holdings with the lowest unrealized-gain percentage
//! first; TFSA holdings only once taxable value in the class is
//! exhausted. Losses are not harvested - a non-positive gain simply
//! carries zero CGT.

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::{Asset, AssetClass, AssetType};
use crate::constants::CGT_INCLUSION_RATE;
use crate::errors::Result;
use crate::fx::RateTable;
use crate::portfolio::allocation::{drift_report, urgency_for, Urgency};
use crate::portfolio::valuation::{valuate, AssetValuation};
use crate::settings::Settings;

use super::{RebalancingAction, RebalancingPlan, RebalancingSummary, TradeDirection};

/// Generates the rebalancing plan for a portfolio snapshot.
pub fn rebalancing_plan(
    assets: &[Asset],
    rates: &RateTable,
    settings: &Settings,
) -> Result<RebalancingPlan> {
    let investible: Vec<&Asset> = assets
        .iter()
        .filter(|a| a.asset_type == AssetType::Investible)
        .collect();

    let drift = drift_report(assets, rates, settings)?;
    let investible_total: Decimal = {
        let mut total = Decimal::ZERO;
        for asset in &investible {
            total += crate::portfolio::valuation::asset_value(asset, rates)?;
        }
        total
    };

    if investible_total.is_zero() || drift.entries.is_empty() {
        return Ok(RebalancingPlan::empty());
    }

    // Valuations of investible assets keyed by class, for sell selection
    let owned: Vec<Asset> = investible.iter().map(|a| (*a).clone()).collect();
    let valuations = valuate(&owned, rates)?;
    let mut by_class: BTreeMap<AssetClass, Vec<(&Asset, &AssetValuation)>> = BTreeMap::new();
    for (asset, valuation) in owned.iter().zip(valuations.iter()) {
        by_class
            .entry(asset.asset_class.clone())
            .or_default()
            .push((asset, valuation));
    }

    let mut sells: Vec<RebalancingAction> = Vec::new();
    let mut buys: Vec<RebalancingAction> = Vec::new();

    for entry in &drift.entries {
        if entry.drift.abs() <= settings.thresholds.rebalance_drift_pct {
            continue;
        }
        let urgency = urgency_for(entry.drift.abs(), &settings.thresholds);
        let gap_amount = entry.drift.abs() / dec!(100) * investible_total;

        if entry.drift > Decimal::ZERO {
            // Overweight: sell down to target, never below
            let candidates = by_class.get(&entry.asset_class).cloned().unwrap_or_default();
            sells.extend(sell_actions(
                entry.asset_class.clone(),
                candidates,
                gap_amount,
                urgency,
                settings,
            ));
        } else {
            // Underweight: one buy for the shortfall, no tax impact
            buys.push(RebalancingAction {
                asset_class: entry.asset_class.clone(),
                asset_id: None,
                asset_name: None,
                direction: TradeDirection::Buy,
                amount: gap_amount,
                estimated_cgt: Decimal::ZERO,
                urgency,
            });
        }
    }

    sells.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.asset_name.cmp(&b.asset_name))
    });
    buys.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.asset_class.label().cmp(b.asset_class.label()))
    });

    let mut actions = sells;
    actions.extend(buys);

    let total_tax_impact: Decimal = actions.iter().map(|a| a.estimated_cgt).sum();
    let high_priority_count = actions.iter().filter(|a| a.urgency == Urgency::High).count();
    let summary = RebalancingSummary {
        total_actions: actions.len(),
        high_priority_count,
    };

    debug!(
        "Rebalancing plan: {} actions, tax impact {}",
        summary.total_actions, total_tax_impact
    );

    Ok(RebalancingPlan {
        actions,
        total_tax_impact,
        summary,
    })
}

/// Walks sell candidates in tax-preference order until the class excess
/// is covered, capping each sell at the asset's available value.
fn sell_actions(
    asset_class: AssetClass,
    mut candidates: Vec<(&Asset, &AssetValuation)>,
    excess: Decimal,
    urgency: Urgency,
    settings: &Settings,
) -> Vec<RebalancingAction> {
    // Taxable before TFSA, then lowest gain percentage, then name
    candidates.sort_by(|(a, va), (b, vb)| {
        a.account_type
            .is_cgt_exempt()
            .cmp(&b.account_type.is_cgt_exempt())
            .then_with(|| va.gain_percentage.cmp(&vb.gain_percentage))
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut actions = Vec::new();
    let mut remaining = excess;
    for (asset, valuation) in candidates {
        if remaining <= Decimal::ZERO {
            break;
        }
        if valuation.value.is_zero() {
            continue;
        }
        let amount = remaining.min(valuation.value);
        actions.push(RebalancingAction {
            asset_class: asset_class.clone(),
            asset_id: Some(asset.id.clone()),
            asset_name: Some(asset.name.clone()),
            direction: TradeDirection::Sell,
            amount,
            estimated_cgt: estimate_cgt(asset, valuation, amount, settings),
            urgency,
        });
        remaining -= amount;
    }
    actions
}

/// CGT on selling `amount` of a position.
///
/// The realized gain is the position's unrealized gain prorated by the
/// fraction sold; the estimate is gain x 40% inclusion x marginal rate.
/// TFSA holdings and non-positive gains carry zero.
fn estimate_cgt(
    asset: &Asset,
    valuation: &AssetValuation,
    amount: Decimal,
    settings: &Settings,
) -> Decimal {
    if asset.account_type.is_cgt_exempt() || valuation.unrealized_gain <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let realized_gain = valuation.unrealized_gain * amount / valuation.value;
    realized_gain * CGT_INCLUSION_RATE * settings.profile.marginal_tax_rate / dec!(100)
}
