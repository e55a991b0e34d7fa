//! Published history-quote and candle record schemas.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One daily history quote row, in the published field set.
///
/// Serialized field names follow the server's uppercase column
/// convention. `VALUE` is turnover in rubles, `QUANTITY` the number of
/// securities traded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryQuote {
    /// Trade date.
    #[serde(rename = "TRADEDATE")]
    pub trade_date: NaiveDate,
    /// Opening price.
    #[serde(rename = "OPEN")]
    pub open: Option<f64>,
    /// Highest price.
    #[serde(rename = "HIGH")]
    pub high: Option<f64>,
    /// Lowest price.
    #[serde(rename = "LOW")]
    pub low: Option<f64>,
    /// Closing price.
    #[serde(rename = "CLOSE")]
    pub close: Option<f64>,
    /// Yield at close, where the instrument quotes one.
    #[serde(rename = "YIELD")]
    pub yield_rate: Option<f64>,
    /// Duration in days, for bonds.
    #[serde(rename = "DURATION")]
    pub duration: Option<f64>,
    /// Turnover in rubles.
    #[serde(rename = "VALUE")]
    pub value: Option<f64>,
    /// Number of securities traded.
    #[serde(rename = "QUANTITY")]
    pub quantity: Option<f64>,
    /// Volume-weighted average price.
    #[serde(rename = "WAPRICE")]
    pub waprice: Option<f64>,
}

/// One OHLC candle row, in the published field set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Start of the candle interval.
    pub begin: NaiveDateTime,
    /// End of the candle interval.
    pub end: NaiveDateTime,
    /// Opening price.
    pub open: f64,
    /// Highest price.
    pub high: f64,
    /// Lowest price.
    pub low: f64,
    /// Closing price.
    pub close: f64,
    /// Turnover in rubles.
    pub value: f64,
    /// Number of securities traded.
    pub quantity: f64,
}
