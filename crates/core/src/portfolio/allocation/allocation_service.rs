//! Percentage breakdowns per dimension and actual-vs-target drift.

use std::collections::BTreeMap;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::{Asset, AssetClass, AssetType};
use crate::errors::Result;
use crate::fx::RateTable;
use crate::portfolio::valuation::{asset_value, group_totals, Dimension};
use crate::settings::{Settings, Thresholds};

use super::{AllocationEntry, DriftEntry, DriftReport, Urgency};

/// Percentage-of-total breakdown along the chosen dimension.
///
/// Sorted by descending value, ties alphabetical by name. A zero group
/// total yields zero percentages across the board.
pub fn allocation(
    assets: &[Asset],
    rates: &RateTable,
    dimension: Dimension,
) -> Result<Vec<AllocationEntry>> {
    let totals = group_totals(assets, rates, dimension)?;
    let group_total: Decimal = totals.iter().map(|g| g.value).sum();

    Ok(totals
        .into_iter()
        .map(|g| {
            let percentage = if group_total.is_zero() {
                Decimal::ZERO
            } else {
                g.value / group_total * dec!(100)
            };
            AllocationEntry {
                name: g.name,
                value: g.value,
                percentage,
            }
        })
        .collect())
}

/// Maps a drift magnitude onto an urgency band.
/// Strictly-greater-than at both boundaries.
pub fn urgency_for(drift_abs: Decimal, thresholds: &Thresholds) -> Urgency {
    if drift_abs > thresholds.drift_high_pct {
        Urgency::High
    } else if drift_abs > thresholds.drift_low_pct {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

/// Compares actual investible allocation per asset class against the
/// configured targets.
///
/// The comparison runs over the union of target classes and classes held
/// in the portfolio; a held class absent from the targets is implicitly
/// targeted at 0%. Actual percentages are of investible value only,
/// since targets are stated over investible assets.
pub fn drift_report(
    assets: &[Asset],
    rates: &RateTable,
    settings: &Settings,
) -> Result<DriftReport> {
    debug!(
        "Computing drift over {} target classes",
        settings.target_allocation.len()
    );

    // Investible value per class, keyed in class order for determinism
    let mut class_values: BTreeMap<AssetClass, Decimal> = BTreeMap::new();
    let mut investible_total = Decimal::ZERO;
    for asset in assets {
        if asset.asset_type != AssetType::Investible {
            continue;
        }
        let value = asset_value(asset, rates)?;
        *class_values
            .entry(asset.asset_class.clone())
            .or_insert(Decimal::ZERO) += value;
        investible_total += value;
    }

    // Union of held classes and targeted classes
    let mut classes: BTreeMap<AssetClass, ()> = BTreeMap::new();
    for class in class_values.keys() {
        classes.insert(class.clone(), ());
    }
    for class in settings.target_allocation.keys() {
        classes.insert(class.clone(), ());
    }

    if classes.is_empty() {
        return Ok(DriftReport::empty());
    }

    let mut entries: Vec<DriftEntry> = classes
        .into_keys()
        .map(|class| {
            let value = class_values.get(&class).copied().unwrap_or(Decimal::ZERO);
            let actual_pct = if investible_total.is_zero() {
                Decimal::ZERO
            } else {
                value / investible_total * dec!(100)
            };
            let target_pct = settings
                .target_allocation
                .get(&class)
                .copied()
                .unwrap_or(Decimal::ZERO);
            DriftEntry {
                asset_class: class,
                actual_pct,
                target_pct,
                drift: actual_pct - target_pct,
            }
        })
        .collect();

    entries.sort_by(|a, b| {
        b.drift
            .abs()
            .cmp(&a.drift.abs())
            .then_with(|| a.asset_class.label().cmp(b.asset_class.label()))
    });

    let total_drift: Decimal = entries.iter().map(|e| e.drift.abs()).sum();
    let max_drift = entries
        .iter()
        .map(|e| e.drift.abs())
        .max()
        .unwrap_or(Decimal::ZERO);

    Ok(DriftReport {
        entries,
        total_drift,
        max_drift,
        urgency: urgency_for(max_drift, &settings.thresholds),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AccountType;
    use std::collections::HashMap;

    fn make_asset(id: &str, class: AssetClass, value: Decimal) -> Asset {
        Asset {
            id: id.to_string(),
            name: id.to_string(),
            asset_class: class,
            asset_type: AssetType::Investible,
            currency: "ZAR".to_string(),
            units: dec!(1),
            current_price: value,
            cost_price: value,
            dividend_yield: Decimal::ZERO,
            interest_yield: Decimal::ZERO,
            ter: Decimal::ZERO,
            expected_return: None,
            account_type: AccountType::Taxable,
            sector: None,
            region: None,
            platform: None,
        }
    }

    fn zar_table() -> RateTable {
        RateTable::new("ZAR", HashMap::new())
    }

    #[test]
    fn test_allocation_percentages_sum_to_100() {
        let assets = vec![
            make_asset("a", AssetClass::SaEquity, dec!(600)),
            make_asset("b", AssetClass::Bonds, dec!(300)),
            make_asset("c", AssetClass::Cash, dec!(100)),
        ];
        let entries = allocation(&assets, &zar_table(), Dimension::AssetClass).unwrap();
        let sum: Decimal = entries.iter().map(|e| e.percentage).sum();
        assert_eq!(sum, dec!(100));
        assert_eq!(entries[0].name, "SA Equity");
        assert_eq!(entries[0].percentage, dec!(60));
    }

    #[test]
    fn test_zero_total_gives_zero_percentages() {
        let assets = vec![
            make_asset("a", AssetClass::SaEquity, Decimal::ZERO),
            make_asset("b", AssetClass::Bonds, Decimal::ZERO),
        ];
        let entries = allocation(&assets, &zar_table(), Dimension::AssetClass).unwrap();
        assert!(entries.iter().all(|e| e.percentage.is_zero()));
    }

    #[test]
    fn test_drift_scenario_50_50_vs_70_30() {
        let assets = vec![
            make_asset("a", AssetClass::SaEquity, dec!(500)),
            make_asset("b", AssetClass::Bonds, dec!(500)),
        ];
        let mut settings = Settings::default();
        settings.target_allocation.insert(AssetClass::SaEquity, dec!(70));
        settings.target_allocation.insert(AssetClass::Bonds, dec!(30));

        let report = drift_report(&assets, &zar_table(), &settings).unwrap();
        assert_eq!(report.total_drift, dec!(40));
        assert_eq!(report.max_drift, dec!(20));

        let bonds = report
            .entries
            .iter()
            .find(|e| e.asset_class == AssetClass::Bonds)
            .unwrap();
        assert_eq!(bonds.drift, dec!(20));
        let equity = report
            .entries
            .iter()
            .find(|e| e.asset_class == AssetClass::SaEquity)
            .unwrap();
        assert_eq!(equity.drift, dec!(-20));
        // max_drift 20 > default high threshold 8
        assert_eq!(report.urgency, Urgency::High);
    }

    #[test]
    fn test_untargeted_class_has_implicit_zero_target() {
        let assets = vec![
            make_asset("a", AssetClass::SaEquity, dec!(900)),
            make_asset("c", AssetClass::Crypto, dec!(100)),
        ];
        let mut settings = Settings::default();
        settings
            .target_allocation
            .insert(AssetClass::SaEquity, dec!(100));

        let report = drift_report(&assets, &zar_table(), &settings).unwrap();
        let crypto = report
            .entries
            .iter()
            .find(|e| e.asset_class == AssetClass::Crypto)
            .unwrap();
        assert_eq!(crypto.target_pct, Decimal::ZERO);
        assert_eq!(crypto.drift, dec!(10));
    }

    #[test]
    fn test_urgency_bands_are_strictly_greater_than() {
        let thresholds = Thresholds::default();
        assert_eq!(urgency_for(thresholds.drift_low_pct, &thresholds), Urgency::Low);
        assert_eq!(
            urgency_for(thresholds.drift_low_pct + dec!(0.01), &thresholds),
            Urgency::Medium
        );
        assert_eq!(urgency_for(thresholds.drift_high_pct, &thresholds), Urgency::Medium);
        assert_eq!(
            urgency_for(thresholds.drift_high_pct + dec!(0.01), &thresholds),
            Urgency::High
        );
    }

    #[test]
    fn test_non_investible_assets_excluded_from_drift() {
        let mut home = make_asset("home", AssetClass::Property, dec!(5000));
        home.asset_type = AssetType::NonInvestible;
        let assets = vec![make_asset("a", AssetClass::SaEquity, dec!(1000)), home];

        let mut settings = Settings::default();
        settings
            .target_allocation
            .insert(AssetClass::SaEquity, dec!(100));

        let report = drift_report(&assets, &zar_table(), &settings).unwrap();
        let equity = report
            .entries
            .iter()
            .find(|e| e.asset_class == AssetClass::SaEquity)
            .unwrap();
        assert_eq!(equity.actual_pct, dec!(100));
        assert!(report
            .entries
            .iter()
            .all(|e| e.asset_class != AssetClass::Property));
    }
}
