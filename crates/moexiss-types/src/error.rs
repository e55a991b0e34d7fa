//! Error types for moexiss.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for moexiss operations.
pub type Result<T> = std::result::Result<T, MoexError>;

/// Errors that can occur while talking to MOEX ISS.
#[derive(Error, Debug)]
pub enum MoexError {
    /// The HTTP call itself failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A single-entity lookup returned no rows.
    #[error("security {0} not found")]
    SecurityNotFound(String),

    /// The requested board is not listed for the security.
    #[error("unknown board {board} for security {seccode}")]
    UnknownBoard {
        /// The security ticker.
        seccode: String,
        /// The board identifier that was requested.
        board: String,
    },

    /// No board was requested and the security has no primary board.
    #[error("security {0} has no primary board")]
    NoPrimaryBoard(String),

    /// Invalid date range.
    #[error(transparent)]
    DateRange(#[from] DateRangeError),

    /// A query parameter was supplied with a value of the wrong kind.
    #[error("parameter {name} expects a {expected} value")]
    ParameterType {
        /// The query parameter name.
        name: String,
        /// The value kind the endpoint declares for it.
        expected: &'static str,
    },
}

/// Classified failures of a single HTTP request-response cycle.
///
/// These never unwind through pagination: a page sequence that hits one
/// returns its partial accumulation with the error attached.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The server answered with a non-2xx status.
    #[error("HTTP status {status}")]
    HttpStatus {
        /// The HTTP status code.
        status: u16,
    },

    /// DNS resolution, connect, or timeout failure.
    #[error("network error: {0}")]
    Network(String),

    /// The body was not valid JSON.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Error for invalid date ranges.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    /// Start date is after end date.
    #[error("Invalid date range: {from} > {till}")]
    InvalidRange {
        /// The start date.
        from: NaiveDate,
        /// The end date.
        till: NaiveDate,
    },
}
