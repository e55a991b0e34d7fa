//! Trading session definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Trading session selector for history quotes.
///
/// Not every instrument trades in every session; the server ignores the
/// selector where it does not apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TradingSession {
    /// Morning trading session.
    Morning,
    /// Main trading session.
    #[default]
    Main,
    /// Evening trading session.
    Evening,
    /// Data across all sessions.
    Total,
}

impl TradingSession {
    /// Returns the ISS `tradingsession` code.
    #[must_use]
    pub const fn code(&self) -> i64 {
        match self {
            Self::Morning => 0,
            Self::Main => 1,
            Self::Evening => 2,
            Self::Total => 3,
        }
    }

    /// Returns the session as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Main => "main",
            Self::Evening => "evening",
            Self::Total => "total",
        }
    }

    /// Returns all sessions.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Morning, Self::Main, Self::Evening, Self::Total]
    }
}

impl std::fmt::Display for TradingSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TradingSession {
    type Err = TradingSessionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "main" => Ok(Self::Main),
            "evening" => Ok(Self::Evening),
            "total" | "all" => Ok(Self::Total),
            _ => Err(TradingSessionParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid trading session string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradingSessionParseError(String);

impl std::fmt::Display for TradingSessionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid trading session '{}', expected one of: morning, main, evening, total",
            self.0
        )
    }
}

impl std::error::Error for TradingSessionParseError {}
