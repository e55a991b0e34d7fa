//! Security lookup and quote series assembly for the moexiss MOEX ISS
//! client.
//!
//! This crate layers the domain operations on top of the fetch pipeline:
//!
//! - [`load_security`] - One security's description and trading boards
//! - [`history_quotes`] / [`candle_quotes`] - Paginated quote series,
//!   clamped to a board's history availability window
//! - [`ExchangeDirectory`] - Eager engines/markets snapshot

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moexiss/moexiss/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod directory;
mod quotes;
mod security;

pub use directory::ExchangeDirectory;
pub use quotes::{candle_quotes, candle_quotes_sorted, history_quotes, history_quotes_sorted};
pub use security::load_security;
