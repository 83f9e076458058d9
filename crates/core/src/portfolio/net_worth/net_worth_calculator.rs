//! Net worth and retirement capital targets.

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::{Asset, Liability};
use crate::errors::Result;
use crate::fx::RateTable;
use crate::portfolio::valuation::{investible_split, total_value};
use crate::settings::Settings;

use super::{CapitalTarget, NetWorthSummary};

/// Computes assets minus liabilities in the reporting currency, plus the
/// capital required at each configured withdrawal rate and the investible
/// portfolio's progress toward it.
pub fn net_worth(
    assets: &[Asset],
    liabilities: &[Liability],
    rates: &RateTable,
    settings: &Settings,
) -> Result<NetWorthSummary> {
    let total_assets = total_value(assets, rates)?;

    let mut total_liabilities = Decimal::ZERO;
    for liability in liabilities {
        total_liabilities += rates.to_reporting(liability.principal, &liability.currency)?;
    }

    let investible = investible_split(assets, rates)?.investible;
    let rates_cfg = &settings.withdrawal_rates;
    let capital_targets = vec![
        capital_target("conservative", rates_cfg.conservative, investible, settings),
        capital_target("safe", rates_cfg.safe, investible, settings),
        capital_target("aggressive", rates_cfg.aggressive, investible, settings),
    ];

    debug!(
        "Net worth: {} assets - {} liabilities",
        total_assets, total_liabilities
    );

    Ok(NetWorthSummary {
        currency: rates.reporting_currency().to_string(),
        total_assets,
        total_liabilities,
        net_worth: total_assets - total_liabilities,
        capital_targets,
    })
}

/// Displays a net worth figure in another currency. Rounding here never
/// feeds back into tax or scoring paths.
pub fn net_worth_in(
    reporting_amount: Decimal,
    target_currency: &str,
    rates: &RateTable,
) -> Result<Decimal> {
    Ok(rates.to_currency(reporting_amount, target_currency)?)
}

fn capital_target(
    label: &str,
    rate_pct: Decimal,
    investible: Decimal,
    settings: &Settings,
) -> CapitalTarget {
    // A zero rate resolves to zero required capital, not infinity
    let required_capital = if rate_pct.is_zero() {
        Decimal::ZERO
    } else {
        settings.profile.annual_expenses / (rate_pct / dec!(100))
    };
    let progress_pct = if required_capital.is_zero() {
        Decimal::ZERO
    } else {
        investible / required_capital * dec!(100)
    };
    CapitalTarget {
        label: label.to_string(),
        withdrawal_rate_pct: rate_pct,
        required_capital,
        progress_pct,
    }
}
