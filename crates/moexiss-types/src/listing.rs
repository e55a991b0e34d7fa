//! Catalog listing records: engines, markets, and the securities list.

use serde::{Deserialize, Serialize};

/// Filter for the `is_trading` query parameter of securities listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TradingFilter {
    /// All securities, traded or not.
    #[default]
    All,
    /// Securities currently traded.
    Traded,
    /// Securities no longer traded.
    NonTraded,
}

impl TradingFilter {
    /// Returns the wire value of the `is_trading` parameter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "",
            Self::Traded => "1",
            Self::NonTraded => "0",
        }
    }
}

/// One row of the engines listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineRecord {
    /// Numeric engine id.
    #[serde(default)]
    pub id: Option<i64>,
    /// Engine identifier used in request paths (e.g. "stock").
    pub name: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: Option<String>,
}

/// One row of the markets listing for an engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRecord {
    /// Numeric market id.
    #[serde(default)]
    pub id: Option<i64>,
    /// Market identifier used in request paths (e.g. "shares").
    pub name: String,
    /// Human-readable title.
    #[serde(default)]
    pub title: Option<String>,
}

/// One row of the securities listing, reduced to the published field set.
///
/// Deserialization ignores every column the schema does not declare,
/// which is how the listing filter is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SecurityRecord {
    /// Security ticker.
    #[serde(default)]
    pub secid: String,
    /// Short display name.
    #[serde(default)]
    pub shortname: Option<String>,
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// State registration number.
    #[serde(default)]
    pub regnumber: Option<String>,
    /// ISIN code.
    #[serde(default)]
    pub isin: Option<String>,
    /// 1 when the security is currently traded, 0 otherwise.
    #[serde(default)]
    pub is_traded: Option<i64>,
    /// Numeric issuer id.
    #[serde(default)]
    pub emitent_id: Option<i64>,
    /// Issuer title.
    #[serde(default)]
    pub emitent_title: Option<String>,
    /// Issuer tax number.
    #[serde(default)]
    pub emitent_inn: Option<String>,
    /// State registration number (legacy column).
    #[serde(default)]
    pub gosreg: Option<String>,
    /// Primary board id.
    #[serde(default)]
    pub primary_boardid: Option<String>,
}
