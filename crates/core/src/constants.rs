use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Bucket name for assets with an empty or missing classification key
pub const UNCATEGORIZED: &str = "Uncategorized";

/// CGT inclusion rate applied to realized gains before the marginal rate
pub const CGT_INCLUSION_RATE: Decimal = dec!(0.40);

/// Sub-scores below this cutoff produce a recommendation
pub const HEALTHY_SCORE_CUTOFF: Decimal = dec!(70);

/// Emergency fund target in months; the resilience score saturates here
pub const EMERGENCY_FUND_TARGET_MONTHS: Decimal = dec!(6);
