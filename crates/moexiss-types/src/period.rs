//! Candle period definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Candle aggregation period.
///
/// The ISS `interval` codes are not durations: a day is 24, a week is 7,
/// a month is 31 and a quarter is 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CandlePeriod {
    /// 1-minute candles.
    #[serde(rename = "m1")]
    Minute1,
    /// 10-minute candles.
    #[serde(rename = "m10")]
    Minute10,
    /// 1-hour candles.
    #[serde(rename = "h1")]
    Hour1,
    /// Daily candles.
    #[default]
    #[serde(rename = "d1")]
    Day1,
    /// Weekly candles.
    #[serde(rename = "w1")]
    Week1,
    /// Monthly candles.
    #[serde(rename = "mn1")]
    Month1,
    /// Quarterly candles.
    #[serde(rename = "q1")]
    Quarter1,
}

impl CandlePeriod {
    /// Returns the ISS `interval` code for this period.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Minute1 => 1,
            Self::Minute10 => 10,
            Self::Hour1 => 60,
            Self::Day1 => 24,
            Self::Week1 => 7,
            Self::Month1 => 31,
            Self::Quarter1 => 4,
        }
    }

    /// Returns the period as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "m1",
            Self::Minute10 => "m10",
            Self::Hour1 => "h1",
            Self::Day1 => "d1",
            Self::Week1 => "w1",
            Self::Month1 => "mn1",
            Self::Quarter1 => "q1",
        }
    }

    /// Returns all available periods.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Minute1,
            Self::Minute10,
            Self::Hour1,
            Self::Day1,
            Self::Week1,
            Self::Month1,
            Self::Quarter1,
        ]
    }
}

impl std::fmt::Display for CandlePeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CandlePeriod {
    type Err = CandlePeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "m1" | "1m" | "minute" | "minute1" => Ok(Self::Minute1),
            "m10" | "10m" | "minute10" => Ok(Self::Minute10),
            "h1" | "1h" | "hour" | "hour1" => Ok(Self::Hour1),
            "d1" | "1d" | "day" | "day1" | "daily" => Ok(Self::Day1),
            "w1" | "1w" | "week" | "weekly" => Ok(Self::Week1),
            "mn1" | "1mn" | "month" | "monthly" => Ok(Self::Month1),
            "q1" | "1q" | "quarter" | "quarterly" => Ok(Self::Quarter1),
            _ => Err(CandlePeriodParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid candle period string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandlePeriodParseError(String);

impl std::fmt::Display for CandlePeriodParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid candle period '{}', expected one of: m1, m10, h1, d1, w1, mn1, q1",
            self.0
        )
    }
}

impl std::error::Error for CandlePeriodParseError {}
