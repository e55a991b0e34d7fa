//! Core types for the moexiss MOEX ISS client.
//!
//! This crate provides the fundamental data structures used throughout
//! moexiss:
//!
//! - [`DateRange`] - Inclusive date range for quote requests
//! - [`CandlePeriod`] / [`TradingSession`] - ISS interval and session codes
//! - [`Security`] / [`BoardInfo`] - Security metadata and trading boards
//! - [`SecurityRecord`] / [`EngineRecord`] / [`MarketRecord`] - Listing rows
//! - [`HistoryQuote`] / [`Candle`] - Published quote record schemas

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moexiss/moexiss/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod date_range;
mod error;
mod listing;
mod period;
mod quote;
mod security;
mod session;

pub use date_range::DateRange;
pub use error::{DateRangeError, MoexError, Result, TransportError};
pub use listing::{EngineRecord, MarketRecord, SecurityRecord, TradingFilter};
pub use period::{CandlePeriod, CandlePeriodParseError};
pub use quote::{Candle, HistoryQuote};
pub use security::{BoardInfo, Security};
pub use session::{TradingSession, TradingSessionParseError};
