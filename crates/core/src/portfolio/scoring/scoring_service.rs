//! Composite portfolio quality scoring.
//!
//! Four independent sub-scores (diversification, balance, resilience,
//! risk), each 0-100 and computed purely from the asset snapshot and
//! settings, combined into one overall score and letter grade.
//!
//! Overall weights: diversification 0.30, balance 0.25, resilience 0.20,
//! risk 0.25 (they sum to 1).

use log::debug;
use num_traits::clamp;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::Asset;
use crate::constants::{EMERGENCY_FUND_TARGET_MONTHS, HEALTHY_SCORE_CUTOFF};
use crate::errors::Result;
use crate::fx::RateTable;
use crate::portfolio::allocation::{allocation, drift_report, AllocationEntry, DriftReport};
use crate::portfolio::concentration::{detect, ConcentrationRisk, RiskSeverity, RiskType};
use crate::portfolio::valuation::{total_value, valuate, Dimension};
use crate::settings::Settings;

use super::{
    BalanceReport, DiversificationReport, LargestPosition, QualityScore, Recommendation,
    RecommendationPriority, ResilienceReport, RiskReport,
};

// Axis weights for the combined HHI (sum to 1)
const HHI_WEIGHT_ASSET: Decimal = dec!(0.30);
const HHI_WEIGHT_CLASS: Decimal = dec!(0.25);
const HHI_WEIGHT_CURRENCY: Decimal = dec!(0.20);
const HHI_WEIGHT_REGION: Decimal = dec!(0.15);
const HHI_WEIGHT_SECTOR: Decimal = dec!(0.10);

// Overall weights for the four sub-scores (sum to 1)
const WEIGHT_DIVERSIFICATION: Decimal = dec!(0.30);
const WEIGHT_BALANCE: Decimal = dec!(0.25);
const WEIGHT_RESILIENCE: Decimal = dec!(0.20);
const WEIGHT_RISK: Decimal = dec!(0.25);

const HHI_MAX: Decimal = dec!(10000);
const HUNDRED: Decimal = dec!(100);

/// Computes the full quality report for a portfolio snapshot.
pub fn quality_score(
    assets: &[Asset],
    rates: &RateTable,
    settings: &Settings,
) -> Result<QualityScore> {
    debug!("Scoring portfolio of {} assets", assets.len());

    let drift = drift_report(assets, rates, settings)?;
    let risks = detect(assets, rates, &settings.thresholds)?;

    let diversification = diversification_score(assets, rates)?;
    let balance = balance_score(&drift);
    let resilience = resilience_score(assets, rates, settings)?;
    let risk = risk_score(&risks, settings);

    let overall = clamp(
        diversification.score * WEIGHT_DIVERSIFICATION
            + balance.score * WEIGHT_BALANCE
            + resilience.score * WEIGHT_RESILIENCE
            + risk.score * WEIGHT_RISK,
        Decimal::ZERO,
        HUNDRED,
    );

    let recommendations =
        recommendations(&diversification, &balance, &resilience, &risk, &drift, &risks);

    Ok(QualityScore {
        overall,
        grade: grade_for(overall),
        diversification,
        balance,
        resilience,
        risk,
        recommendations,
    })
}

/// Sum of squared percentage shares, percentages in [0,100].
/// 10000 for a single-entry axis, approaching 0 as the axis spreads.
fn hhi(entries: &[AllocationEntry]) -> Decimal {
    entries.iter().map(|e| e.percentage * e.percentage).sum()
}

/// Inverse, bounded mapping of the weighted-average HHI across five axes.
/// A single-asset portfolio (HHI 10000) scores 0; a maximally spread one
/// approaches 100. Linear in the HHI, so growing an already-dominant
/// position can only lower the score.
pub fn diversification_score(assets: &[Asset], rates: &RateTable) -> Result<DiversificationReport> {
    let total = total_value(assets, rates)?;
    if assets.is_empty() || total.is_zero() {
        return Ok(DiversificationReport {
            score: Decimal::ZERO,
            weighted_hhi: HHI_MAX,
            largest_position: None,
            holdings_count: assets.len(),
        });
    }

    // Per-asset axis from raw valuations; the other four via allocation()
    let valuations = valuate(assets, rates)?;
    let asset_entries: Vec<AllocationEntry> = valuations
        .iter()
        .map(|v| AllocationEntry {
            name: v.name.clone(),
            value: v.value,
            percentage: v.value / total * HUNDRED,
        })
        .collect();

    let weighted_hhi = hhi(&asset_entries) * HHI_WEIGHT_ASSET
        + hhi(&allocation(assets, rates, Dimension::AssetClass)?) * HHI_WEIGHT_CLASS
        + hhi(&allocation(assets, rates, Dimension::Currency)?) * HHI_WEIGHT_CURRENCY
        + hhi(&allocation(assets, rates, Dimension::Region)?) * HHI_WEIGHT_REGION
        + hhi(&allocation(assets, rates, Dimension::Sector)?) * HHI_WEIGHT_SECTOR;

    let score = clamp(
        (HHI_MAX - weighted_hhi) / HHI_MAX * HUNDRED,
        Decimal::ZERO,
        HUNDRED,
    );

    let largest_position = asset_entries
        .iter()
        .max_by(|a, b| {
            a.percentage
                .cmp(&b.percentage)
                .then_with(|| b.name.cmp(&a.name))
        })
        .map(|e| LargestPosition {
            name: e.name.clone(),
            percentage: e.percentage,
        });

    Ok(DiversificationReport {
        score,
        weighted_hhi,
        largest_position,
        holdings_count: assets.len(),
    })
}

/// Decreases continuously with drift: 100 at zero drift, minus 1.5 points
/// per point of max drift and 0.5 per point of total drift, floored at 0.
pub fn balance_score(drift: &DriftReport) -> BalanceReport {
    let score = clamp(
        HUNDRED - dec!(1.5) * drift.max_drift - dec!(0.5) * drift.total_drift,
        Decimal::ZERO,
        HUNDRED,
    );
    BalanceReport {
        score,
        total_drift: drift.total_drift,
        max_drift: drift.max_drift,
    }
}

/// Rewards a liquid emergency buffer and a defensive tilt.
///
/// 60 points scale linearly with the emergency fund up to 6 months and
/// saturate there; 20 points saturate at 10% liquid; 20 points saturate
/// at 25% defensive.
pub fn resilience_score(
    assets: &[Asset],
    rates: &RateTable,
    settings: &Settings,
) -> Result<ResilienceReport> {
    let total = total_value(assets, rates)?;

    let mut liquid = Decimal::ZERO;
    let mut defensive = Decimal::ZERO;
    for asset in assets {
        let value = crate::portfolio::valuation::asset_value(asset, rates)?;
        if asset.asset_class.is_liquid() {
            liquid += value;
        }
        if asset.asset_class.is_defensive() {
            defensive += value;
        }
    }

    let liquidity_ratio = if total.is_zero() {
        Decimal::ZERO
    } else {
        liquid / total * HUNDRED
    };
    let defensive_ratio = if total.is_zero() {
        Decimal::ZERO
    } else {
        defensive / total * HUNDRED
    };

    // Zero annual expenses resolves to zero months, not infinity
    let monthly_expenses = settings.profile.annual_expenses / dec!(12);
    let emergency_fund_months = if monthly_expenses.is_zero() {
        Decimal::ZERO
    } else {
        liquid / monthly_expenses
    };

    let emergency_component = clamp(
        emergency_fund_months / EMERGENCY_FUND_TARGET_MONTHS,
        Decimal::ZERO,
        Decimal::ONE,
    ) * dec!(60);
    let liquidity_component =
        clamp(liquidity_ratio / dec!(10), Decimal::ZERO, Decimal::ONE) * dec!(20);
    let defensive_component =
        clamp(defensive_ratio / dec!(25), Decimal::ZERO, Decimal::ONE) * dec!(20);

    Ok(ResilienceReport {
        score: emergency_component + liquidity_component + defensive_component,
        liquidity_ratio,
        defensive_ratio,
        emergency_fund_months,
    })
}

/// Starts at 100 and loses 10 points per warning, 20 per critical, plus
/// one point per percentage point the worst single-asset and currency
/// offenders sit above their limits.
pub fn risk_score(risks: &[ConcentrationRisk], settings: &Settings) -> RiskReport {
    let warnings = risks
        .iter()
        .filter(|r| r.severity == RiskSeverity::Warning)
        .count();
    let criticals = risks
        .iter()
        .filter(|r| r.severity == RiskSeverity::Critical)
        .count();

    let max_single_asset_pct = risks
        .iter()
        .filter(|r| r.risk_type == RiskType::SingleAsset)
        .map(|r| r.percentage)
        .max()
        .unwrap_or(Decimal::ZERO);
    let max_currency_pct = risks
        .iter()
        .filter(|r| r.risk_type == RiskType::Currency)
        .map(|r| r.percentage)
        .max()
        .unwrap_or(Decimal::ZERO);

    let single_excess = clamp(
        max_single_asset_pct - settings.thresholds.single_asset_pct,
        Decimal::ZERO,
        HUNDRED,
    );
    let currency_excess = clamp(
        max_currency_pct - settings.thresholds.currency_pct,
        Decimal::ZERO,
        HUNDRED,
    );

    let score = clamp(
        HUNDRED
            - dec!(10) * Decimal::from(warnings as u64)
            - dec!(20) * Decimal::from(criticals as u64)
            - single_excess
            - currency_excess,
        Decimal::ZERO,
        HUNDRED,
    );

    RiskReport {
        score,
        risk_count: risks.len(),
        max_single_asset_pct,
        max_currency_pct,
    }
}

/// Letter grade via fixed cutoffs.
pub fn grade_for(overall: Decimal) -> String {
    let grade = if overall >= dec!(90) {
        "A"
    } else if overall >= dec!(75) {
        "B"
    } else if overall >= dec!(60) {
        "C"
    } else if overall >= dec!(40) {
        "D"
    } else {
        "F"
    };
    grade.to_string()
}

fn priority_for(score: Decimal) -> RecommendationPriority {
    if score < dec!(40) {
        RecommendationPriority::High
    } else if score < dec!(55) {
        RecommendationPriority::Medium
    } else {
        RecommendationPriority::Low
    }
}

/// One recommendation per sub-score below the healthy cutoff, naming the
/// weakest contributing factor, ordered by ascending sub-score so the
/// worst area comes first.
fn recommendations(
    diversification: &DiversificationReport,
    balance: &BalanceReport,
    resilience: &ResilienceReport,
    risk: &RiskReport,
    drift: &DriftReport,
    risks: &[ConcentrationRisk],
) -> Vec<Recommendation> {
    let mut scored: Vec<(Decimal, Recommendation)> = Vec::new();

    if diversification.score < HEALTHY_SCORE_CUTOFF {
        let suggestion = match &diversification.largest_position {
            Some(p) => format!(
                "{} is {}% of the portfolio; spread new contributions across more holdings",
                p.name,
                p.percentage.round_dp(1)
            ),
            None => "Add holdings across more asset classes, currencies and sectors".to_string(),
        };
        scored.push((
            diversification.score,
            Recommendation {
                area: "Diversification".to_string(),
                suggestion,
                priority: priority_for(diversification.score),
            },
        ));
    }

    if balance.score < HEALTHY_SCORE_CUTOFF {
        let suggestion = match drift.entries.first() {
            Some(worst) => format!(
                "{} is {}% away from target; redirect contributions toward underweight classes",
                worst.asset_class,
                worst.drift.abs().round_dp(1)
            ),
            None => "Set an allocation target and steer contributions toward it".to_string(),
        };
        scored.push((
            balance.score,
            Recommendation {
                area: "Balance".to_string(),
                suggestion,
                priority: priority_for(balance.score),
            },
        ));
    }

    if resilience.score < HEALTHY_SCORE_CUTOFF {
        let suggestion = if resilience.emergency_fund_months < dec!(3) {
            format!(
                "Emergency fund covers {} months of expenses; build toward 3-6 months in cash or money market",
                resilience.emergency_fund_months.round_dp(1)
            )
        } else {
            format!(
                "Defensive assets are {}% of the portfolio; consider a larger bond or cash buffer",
                resilience.defensive_ratio.round_dp(1)
            )
        };
        scored.push((
            resilience.score,
            Recommendation {
                area: "Resilience".to_string(),
                suggestion,
                priority: priority_for(resilience.score),
            },
        ));
    }

    if risk.score < HEALTHY_SCORE_CUTOFF {
        let worst = risks.iter().max_by(|a, b| {
            (a.severity, a.percentage).cmp(&(b.severity, b.percentage))
        });
        let suggestion = match worst {
            Some(r) => format!(
                "Reduce exposure to {} ({}% of portfolio value)",
                r.name,
                r.percentage.round_dp(1)
            ),
            None => "Reduce concentrated positions across assets and currencies".to_string(),
        };
        scored.push((
            risk.score,
            Recommendation {
                area: "Risk".to_string(),
                suggestion,
                priority: priority_for(risk.score),
            },
        ));
    }

    // Worst sub-score first; tie-break on area name for determinism
    scored.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.area.cmp(&b.1.area)));
    scored.into_iter().map(|(_, rec)| rec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{AccountType, AssetClass, AssetType};
    use std::collections::HashMap;

    fn make_asset(id: &str, class: AssetClass, currency: &str, value: Decimal) -> Asset {
        Asset {
            id: id.to_string(),
            name: id.to_string(),
            asset_class: class,
            asset_type: AssetType::Investible,
            currency: currency.to_string(),
            units: dec!(1),
            current_price: value,
            cost_price: value,
            dividend_yield: Decimal::ZERO,
            interest_yield: Decimal::ZERO,
            ter: Decimal::ZERO,
            expected_return: None,
            account_type: AccountType::Taxable,
            sector: Some(format!("sector-{id}")),
            region: Some(format!("region-{id}")),
            platform: None,
        }
    }

    fn zar_table() -> RateTable {
        let mut rates = HashMap::new();
        rates.insert("USD".to_string(), dec!(18));
        RateTable::new("ZAR", rates)
    }

    #[test]
    fn test_single_asset_diversification_is_zero() {
        let assets = vec![make_asset("only", AssetClass::SaEquity, "ZAR", dec!(1000))];
        let report = diversification_score(&assets, &zar_table()).unwrap();
        // Every axis is fully concentrated: weighted HHI = 10000
        assert_eq!(report.weighted_hhi, dec!(10000));
        assert_eq!(report.score, Decimal::ZERO);
        assert_eq!(report.holdings_count, 1);
        let largest = report.largest_position.unwrap();
        assert_eq!(largest.name, "only");
        assert_eq!(largest.percentage, dec!(100));
    }

    #[test]
    fn test_spreading_improves_diversification() {
        let one = vec![make_asset("a", AssetClass::SaEquity, "ZAR", dec!(100))];
        let four = vec![
            make_asset("a", AssetClass::SaEquity, "ZAR", dec!(100)),
            make_asset("b", AssetClass::Bonds, "USD", dec!(5)),
            make_asset("c", AssetClass::Cash, "ZAR", dec!(100)),
            make_asset("d", AssetClass::Property, "ZAR", dec!(100)),
        ];
        let rates = zar_table();
        let s1 = diversification_score(&one, &rates).unwrap();
        let s4 = diversification_score(&four, &rates).unwrap();
        assert!(s4.score > s1.score);
        assert!(s4.weighted_hhi < s1.weighted_hhi);
    }

    #[test]
    fn test_empty_portfolio_scores_zero() {
        let report = diversification_score(&[], &zar_table()).unwrap();
        assert_eq!(report.score, Decimal::ZERO);
        assert!(report.largest_position.is_none());
    }

    #[test]
    fn test_zero_drift_balance_is_100() {
        let report = balance_score(&DriftReport::empty());
        assert_eq!(report.score, dec!(100));
    }

    #[test]
    fn test_balance_decreases_continuously() {
        let mut small = DriftReport::empty();
        small.max_drift = dec!(2);
        small.total_drift = dec!(4);
        let mut large = DriftReport::empty();
        large.max_drift = dec!(10);
        large.total_drift = dec!(20);
        assert!(balance_score(&small).score > balance_score(&large).score);
        // 100 - 1.5*2 - 0.5*4 = 95
        assert_eq!(balance_score(&small).score, dec!(95));
    }

    #[test]
    fn test_resilience_emergency_fund_saturates() {
        let mut settings = Settings::default();
        settings.profile.annual_expenses = dec!(120000); // 10k monthly

        // 60k liquid = 6 months: emergency component saturated
        let assets = vec![
            make_asset("cash", AssetClass::Cash, "ZAR", dec!(60000)),
            make_asset("eq", AssetClass::SaEquity, "ZAR", dec!(540000)),
        ];
        let report = resilience_score(&assets, &zar_table(), &settings).unwrap();
        assert_eq!(report.emergency_fund_months, dec!(6));

        // 120k liquid = 12 months should not score higher on that component
        let assets_more = vec![
            make_asset("cash", AssetClass::Cash, "ZAR", dec!(120000)),
            make_asset("eq", AssetClass::SaEquity, "ZAR", dec!(540000)),
        ];
        let report_more = resilience_score(&assets_more, &zar_table(), &settings).unwrap();
        assert_eq!(report_more.emergency_fund_months, dec!(12));
        // Higher liquidity ratio still helps the liquidity component,
        // but both runs have the emergency component maxed
        assert!(report_more.score >= report.score);
    }

    #[test]
    fn test_resilience_zero_expenses_is_zero_months() {
        let assets = vec![make_asset("cash", AssetClass::Cash, "ZAR", dec!(1000))];
        let report = resilience_score(&assets, &zar_table(), &Settings::default()).unwrap();
        assert_eq!(report.emergency_fund_months, Decimal::ZERO);
    }

    #[test]
    fn test_risk_score_clean_portfolio_is_100() {
        let report = risk_score(&[], &Settings::default());
        assert_eq!(report.score, dec!(100));
        assert_eq!(report.risk_count, 0);
    }

    #[test]
    fn test_risk_score_penalizes_offenders() {
        let settings = Settings::default();
        let risks = vec![ConcentrationRisk {
            risk_type: RiskType::SingleAsset,
            name: "big".to_string(),
            percentage: dec!(25),
            severity: RiskSeverity::Warning,
        }];
        let report = risk_score(&risks, &settings);
        // 100 - 10 (warning) - 10 (25% vs 15% limit)
        assert_eq!(report.score, dec!(80));
        assert_eq!(report.max_single_asset_pct, dec!(25));
    }

    #[test]
    fn test_grade_cutoffs() {
        assert_eq!(grade_for(dec!(95)), "A");
        assert_eq!(grade_for(dec!(90)), "A");
        assert_eq!(grade_for(dec!(75)), "B");
        assert_eq!(grade_for(dec!(60)), "C");
        assert_eq!(grade_for(dec!(40)), "D");
        assert_eq!(grade_for(dec!(39.99)), "F");
    }

    #[test]
    fn test_recommendations_ordered_worst_first() {
        // Single concentrated asset, no targets, no cash
        let assets = vec![make_asset("only", AssetClass::SaEquity, "ZAR", dec!(1000))];
        let mut settings = Settings::default();
        settings.profile.annual_expenses = dec!(120000);
        settings
            .target_allocation
            .insert(AssetClass::SaEquity, dec!(60));
        settings.target_allocation.insert(AssetClass::Bonds, dec!(40));

        let score = quality_score(&assets, &zar_table(), &settings).unwrap();
        assert!(!score.recommendations.is_empty());
        let scores_in_order: Vec<Decimal> = score
            .recommendations
            .iter()
            .map(|r| match r.area.as_str() {
                "Diversification" => score.diversification.score,
                "Balance" => score.balance.score,
                "Resilience" => score.resilience.score,
                _ => score.risk.score,
            })
            .collect();
        let mut sorted = scores_in_order.clone();
        sorted.sort();
        assert_eq!(scores_in_order, sorted);
    }

    #[test]
    fn test_quality_score_is_idempotent() {
        let assets = vec![
            make_asset("a", AssetClass::SaEquity, "ZAR", dec!(500)),
            make_asset("b", AssetClass::Bonds, "USD", dec!(20)),
            make_asset("c", AssetClass::Cash, "ZAR", dec!(200)),
        ];
        let mut settings = Settings::default();
        settings.exchange_rates.insert("USD".to_string(), dec!(18));
        settings.profile.annual_expenses = dec!(60000);
        settings
            .target_allocation
            .insert(AssetClass::SaEquity, dec!(50));

        let rates = RateTable::from_settings(&settings);
        let first = quality_score(&assets, &rates, &settings).unwrap();
        let second = quality_score(&assets, &rates, &settings).unwrap();
        assert_eq!(first.overall, second.overall);
        assert_eq!(first.grade, second.grade);
        assert_eq!(first.diversification, second.diversification);
        assert_eq!(first.balance, second.balance);
        assert_eq!(first.resilience, second.resilience);
        assert_eq!(first.risk, second.risk);
    }
}
