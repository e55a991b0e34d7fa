//! Security metadata and trading boards.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MoexError;

/// One trading board of a security, with its history availability window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardInfo {
    /// First date with history data, or None if unbounded.
    pub history_from: Option<NaiveDate>,
    /// Last date with history data, or None if unbounded.
    pub history_till: Option<NaiveDate>,
    /// Trading engine the board belongs to (e.g. "stock").
    pub engine: String,
    /// Market within the engine (e.g. "shares", "bonds").
    pub market: String,
    /// Human-readable board title.
    pub title: String,
}

/// Descriptive metadata of one security and its trading boards.
///
/// Built by a single detail lookup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Security {
    /// Security ticker (e.g. "GAZP").
    pub seccode: String,
    /// Short display name from the description block.
    pub shortname: Option<String>,
    /// Face value, as reported by the server.
    pub face_value: Option<String>,
    /// Face value currency.
    pub face_currency: Option<String>,
    /// Board flagged as primary, when the server reports one.
    pub main_board: Option<String>,
    /// All boards the security is listed on, keyed by board id.
    pub boards: HashMap<String, BoardInfo>,
}

impl Security {
    /// Returns the board info for the given board id.
    #[must_use]
    pub fn board(&self, board: &str) -> Option<&BoardInfo> {
        self.boards.get(board)
    }

    /// Returns the info of the primary board, if the server reported one.
    #[must_use]
    pub fn main_board_info(&self) -> Option<&BoardInfo> {
        self.main_board.as_deref().and_then(|b| self.boards.get(b))
    }

    /// Resolves the target board for a quote request: the caller's choice
    /// when given, the primary board otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`MoexError::UnknownBoard`] when the requested board is not
    /// listed for this security and [`MoexError::NoPrimaryBoard`] when no
    /// board was requested and the server reported no primary one.
    pub fn resolve_board<'a>(
        &'a self,
        board: Option<&'a str>,
    ) -> Result<(&'a str, &'a BoardInfo), MoexError> {
        let id = match board {
            Some(id) => id,
            None => self
                .main_board
                .as_deref()
                .ok_or_else(|| MoexError::NoPrimaryBoard(self.seccode.clone()))?,
        };
        let info = self.boards.get(id).ok_or_else(|| MoexError::UnknownBoard {
            seccode: self.seccode.clone(),
            board: id.to_string(),
        })?;
        Ok((id, info))
    }
}

impl std::fmt::Display for Security {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Security {}", self.seccode)?;
        if let Some(info) = self.main_board_info() {
            // main_board is present whenever main_board_info is
            let board = self.main_board.as_deref().unwrap_or_default();
            writeln!(f, "Main board: {} ({})", board, info.title)?;
            writeln!(f, "Engine: {}", info.engine)?;
            writeln!(f, "Market: {}", info.market)?;
            let fmt_date =
                |d: Option<NaiveDate>| d.map_or_else(|| String::from("-"), |d| d.to_string());
            writeln!(
                f,
                "History from {} till {}",
                fmt_date(info.history_from),
                fmt_date(info.history_till)
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Security {
        let mut boards = HashMap::new();
        boards.insert(
            String::from("TQBR"),
            BoardInfo {
                history_from: NaiveDate::from_ymd_opt(2014, 6, 9),
                history_till: NaiveDate::from_ymd_opt(2024, 1, 15),
                engine: String::from("stock"),
                market: String::from("shares"),
                title: String::from("Т+: Акции и ДР - безадрес."),
            },
        );
        Security {
            seccode: String::from("GAZP"),
            shortname: Some(String::from("ГАЗПРОМ ао")),
            face_value: Some(String::from("5")),
            face_currency: Some(String::from("SUR")),
            main_board: Some(String::from("TQBR")),
            boards,
        }
    }

    #[test]
    fn test_resolve_board_defaults_to_primary() {
        let security = sample();
        let (id, info) = security.resolve_board(None).unwrap();
        assert_eq!(id, "TQBR");
        assert_eq!(info.engine, "stock");
    }

    #[test]
    fn test_resolve_board_explicit() {
        let security = sample();
        let (id, _) = security.resolve_board(Some("TQBR")).unwrap();
        assert_eq!(id, "TQBR");
    }

    #[test]
    fn test_resolve_board_unknown() {
        let security = sample();
        assert!(matches!(
            security.resolve_board(Some("SMAL")),
            Err(MoexError::UnknownBoard { .. })
        ));
    }

    #[test]
    fn test_resolve_board_without_primary() {
        let mut security = sample();
        security.main_board = None;
        assert!(matches!(
            security.resolve_board(None),
            Err(MoexError::NoPrimaryBoard(_))
        ));
    }
}
