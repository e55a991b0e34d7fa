//! Rust client library for the MOEX ISS securities data API.
//!
//! This is a facade crate that re-exports functionality from the moexiss
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use moexiss::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = IssClient::with_defaults()?;
//!     let security = load_security(&client, "GAZP")?;
//!
//!     let range = DateRange::new(
//!         chrono::NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
//!         chrono::NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(),
//!     )?;
//!
//!     let quotes =
//!         history_quotes_sorted(&client, &security, range, None, TradingSession::Main)?;
//!     println!("{} rows, complete: {}", quotes.len(), quotes.is_complete());
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moexiss/moexiss/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use moexiss_types::*;

// Re-export the endpoint catalog
pub use moexiss_endpoints::{BASE_URL, EndpointSpec, ParamKind, RequestKind, placeholder};

// Re-export the fetch pipeline
pub use moexiss_fetch::{
    BASE_QUERY, BuiltRequest, ClientConfig, IssClient, IssTransport, PAGE_LIMIT, PageCursor,
    Paged, ParamValue, PathValues, QueryValues, RetryPolicy, Retrying, api, build, extract,
    fetch_all_pages,
};

// Re-export the domain operations
pub use moexiss_securities::{
    ExchangeDirectory, candle_quotes, candle_quotes_sorted, history_quotes,
    history_quotes_sorted, load_security,
};

/// Prelude module for convenient imports.
///
/// ```
/// use moexiss::prelude::*;
/// ```
pub mod prelude {
    pub use moexiss_types::{
        BoardInfo, Candle, CandlePeriod, DateRange, DateRangeError, EngineRecord, HistoryQuote,
        MarketRecord, MoexError, Result, Security, SecurityRecord, TradingFilter, TradingSession,
        TransportError,
    };

    pub use moexiss_endpoints::RequestKind;

    pub use moexiss_fetch::{
        ClientConfig, IssClient, IssTransport, Paged, RetryPolicy, Retrying,
        api::SecuritiesQuery,
    };

    pub use moexiss_securities::{
        ExchangeDirectory, candle_quotes, candle_quotes_sorted, history_quotes,
        history_quotes_sorted, load_security,
    };
}
