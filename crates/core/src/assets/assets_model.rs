//! Asset and liability domain models.
//!
//! These are immutable snapshot records supplied by the surrounding
//! application (storage/import layer). The engine borrows them, never
//! mutates them, and rejects malformed records at the boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

// =============================================================================
// Asset Class
// =============================================================================

/// Asset class taxonomy.
///
/// Keys the target-allocation map and the class-level aggregations, so it
/// derives `Hash`, `Eq` and `Ord` (ordering keeps grouped reductions
/// deterministic). Classes outside the fixed taxonomy land in `Other`
/// carrying the original string, so an import with its own vocabulary
/// survives a serialize/deserialize round trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AssetClass {
    SaEquity,
    OffshoreEquity,
    Bonds,
    Cash,
    MoneyMarket,
    Property,
    Crypto,
    Commodities,
    Other(String),
}

impl AssetClass {
    /// Wire code: SCREAMING_SNAKE for the fixed taxonomy, the carried
    /// string verbatim for `Other`.
    pub fn as_str(&self) -> &str {
        match self {
            AssetClass::SaEquity => "SA_EQUITY",
            AssetClass::OffshoreEquity => "OFFSHORE_EQUITY",
            AssetClass::Bonds => "BONDS",
            AssetClass::Cash => "CASH",
            AssetClass::MoneyMarket => "MONEY_MARKET",
            AssetClass::Property => "PROPERTY",
            AssetClass::Crypto => "CRYPTO",
            AssetClass::Commodities => "COMMODITIES",
            AssetClass::Other(s) => s,
        }
    }

    /// Returns a human-friendly label for this asset class.
    pub fn label(&self) -> &str {
        match self {
            AssetClass::SaEquity => "SA Equity",
            AssetClass::OffshoreEquity => "Offshore Equity",
            AssetClass::Bonds => "Bonds",
            AssetClass::Cash => "Cash",
            AssetClass::MoneyMarket => "Money Market",
            AssetClass::Property => "Property",
            AssetClass::Crypto => "Crypto",
            AssetClass::Commodities => "Commodities",
            AssetClass::Other(s) if s.is_empty() => "Other",
            AssetClass::Other(s) => s,
        }
    }

    /// Liquid classes count toward the emergency fund.
    pub fn is_liquid(&self) -> bool {
        matches!(self, AssetClass::Cash | AssetClass::MoneyMarket)
    }

    /// Defensive classes dampen drawdowns.
    pub fn is_defensive(&self) -> bool {
        matches!(
            self,
            AssetClass::Bonds | AssetClass::Cash | AssetClass::MoneyMarket
        )
    }
}

impl From<String> for AssetClass {
    fn from(value: String) -> Self {
        match value.as_str() {
            "SA_EQUITY" => AssetClass::SaEquity,
            "OFFSHORE_EQUITY" => AssetClass::OffshoreEquity,
            "BONDS" => AssetClass::Bonds,
            "CASH" => AssetClass::Cash,
            "MONEY_MARKET" => AssetClass::MoneyMarket,
            "PROPERTY" => AssetClass::Property,
            "CRYPTO" => AssetClass::Crypto,
            "COMMODITIES" => AssetClass::Commodities,
            _ => AssetClass::Other(value),
        }
    }
}

impl Serialize for AssetClass {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AssetClass {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(AssetClass::from(String::deserialize(deserializer)?))
    }
}

impl std::fmt::Display for AssetClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Asset Type
// =============================================================================

/// Separates the investment portfolio from lifestyle assets.
///
/// Investible assets generate ongoing investment returns and are the base
/// for allocation targets; non-investible assets (e.g. a primary
/// residence) count toward net worth only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetType {
    Investible,
    NonInvestible,
}

impl AssetType {
    pub fn label(&self) -> &'static str {
        match self {
            AssetType::Investible => "Investible",
            AssetType::NonInvestible => "Non-Investible",
        }
    }
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// =============================================================================
// Account Type
// =============================================================================

/// Tax treatment of the account holding an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Taxable,
    /// Tax-free savings account. Gains inside it never incur CGT.
    Tfsa,
    Retirement,
}

impl AccountType {
    /// Whether realized gains in this account are exempt from CGT.
    pub fn is_cgt_exempt(&self) -> bool {
        matches!(self, AccountType::Tfsa)
    }
}

// =============================================================================
// Asset
// =============================================================================

/// A single holding at a point in time.
///
/// Prices and units are in the asset's native `currency`; a price of zero
/// is valid (newly added, unpriced) and yields zero gain percentage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub asset_class: AssetClass,
    pub asset_type: AssetType,
    /// ISO currency code of prices below
    pub currency: String,
    pub units: Decimal,
    pub current_price: Decimal,
    pub cost_price: Decimal,
    /// Percent figures, >= 0
    pub dividend_yield: Decimal,
    pub interest_yield: Decimal,
    pub ter: Decimal,
    /// Optional expected-return override, percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_return: Option<Decimal>,
    pub account_type: AccountType,
    /// Free-form classification strings; empty means unclassified
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
}

impl Asset {
    /// Rejects records that arithmetic downstream must never see.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::InvalidAsset {
                id: self.id.clone(),
                reason: "id cannot be empty".to_string(),
            }
            .into());
        }
        if self.units < Decimal::ZERO {
            return Err(ValidationError::InvalidAsset {
                id: self.id.clone(),
                reason: "units cannot be negative".to_string(),
            }
            .into());
        }
        if self.current_price < Decimal::ZERO || self.cost_price < Decimal::ZERO {
            return Err(ValidationError::InvalidAsset {
                id: self.id.clone(),
                reason: "prices cannot be negative".to_string(),
            }
            .into());
        }
        if self.dividend_yield < Decimal::ZERO
            || self.interest_yield < Decimal::ZERO
            || self.ter < Decimal::ZERO
        {
            return Err(ValidationError::InvalidAsset {
                id: self.id.clone(),
                reason: "yields and TER cannot be negative".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

// =============================================================================
// Liability
// =============================================================================

/// An outstanding debt. Only the principal counts toward net worth.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: String,
    pub name: String,
    pub principal: Decimal,
    pub currency: String,
}

impl Liability {
    pub fn validate(&self) -> Result<()> {
        if self.principal < Decimal::ZERO {
            return Err(ValidationError::InvalidLiability {
                id: self.id.clone(),
                reason: "principal cannot be negative".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
