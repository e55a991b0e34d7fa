//! Endpoint catalog for the moexiss MOEX ISS client.
//!
//! Every request the client can issue is described by a [`RequestKind`]
//! mapping to a static [`EndpointSpec`]: the URL path template with its
//! `__NAME__` placeholders and the query parameters the endpoint accepts.
//! The catalog is a closed table over a closed enum, so completeness is
//! checked at compile time and an unknown request kind cannot exist at
//! runtime.
//!
//! # Example
//!
//! ```
//! use moexiss_endpoints::{ParamKind, RequestKind};
//!
//! let spec = RequestKind::HistoryQuotes.spec();
//! assert_eq!(spec.query_kind("from"), Some(ParamKind::Date));
//! assert!(spec.path_template.contains("__SECCODE__"));
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/moexiss/moexiss/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Base URL for the MOEX ISS API.
pub const BASE_URL: &str = "https://iss.moex.com/iss";

/// Placeholder names used in endpoint path templates.
pub mod placeholder {
    /// Trading engine placeholder.
    pub const ENGINE: &str = "__ENGINE__";
    /// Market placeholder.
    pub const MARKET: &str = "__MARKET__";
    /// Board placeholder.
    pub const BOARD: &str = "__BOARD__";
    /// Security ticker placeholder.
    pub const SECCODE: &str = "__SECCODE__";
}

/// Value format a query parameter expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// Calendar date, formatted `YYYY-MM-DD`.
    Date,
    /// Integer, formatted as a decimal string.
    Integer,
    /// Plain string, passed through as-is.
    Text,
}

impl ParamKind {
    /// Returns the kind name used in diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Integer => "integer",
            Self::Text => "string",
        }
    }
}

/// Static description of one ISS endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointSpec {
    /// URL path template with `__NAME__` placeholders, relative to
    /// [`BASE_URL`].
    pub path_template: &'static str,
    /// Placeholder names the template declares, in path order.
    pub path_params: &'static [&'static str],
    /// Query parameters the endpoint accepts, with their value formats.
    pub query_params: &'static [(&'static str, ParamKind)],
}

impl EndpointSpec {
    /// Returns the declared value format for a query parameter, or None
    /// if the endpoint does not accept it.
    #[must_use]
    pub fn query_kind(&self, name: &str) -> Option<ParamKind> {
        self.query_params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, kind)| *kind)
    }

    /// Returns true if the path template declares the given placeholder.
    #[must_use]
    pub fn declares_placeholder(&self, name: &str) -> bool {
        self.path_params.contains(&name)
    }
}

const ENGINES: EndpointSpec = EndpointSpec {
    path_template: "/engines.json",
    path_params: &[],
    query_params: &[],
};

const MARKETS: EndpointSpec = EndpointSpec {
    path_template: "/engines/__ENGINE__/markets.json",
    path_params: &[placeholder::ENGINE],
    query_params: &[],
};

const SECURITIES_ALL: EndpointSpec = EndpointSpec {
    path_template: "/securities.json",
    path_params: &[],
    query_params: &[("start", ParamKind::Integer), ("is_trading", ParamKind::Text)],
};

const SECURITIES_FOR_ENGINE: EndpointSpec = EndpointSpec {
    path_template: "/securities.json",
    path_params: &[],
    query_params: &[
        ("start", ParamKind::Integer),
        ("is_trading", ParamKind::Text),
        ("engine", ParamKind::Text),
    ],
};

const SECURITIES_FOR_MARKET: EndpointSpec = EndpointSpec {
    path_template: "/securities.json",
    path_params: &[],
    query_params: &[
        ("start", ParamKind::Integer),
        ("is_trading", ParamKind::Text),
        ("engine", ParamKind::Text),
        ("market", ParamKind::Text),
    ],
};

const SECURITIES_SEARCH: EndpointSpec = EndpointSpec {
    path_template: "/securities.json",
    path_params: &[],
    query_params: &[
        ("start", ParamKind::Integer),
        ("is_trading", ParamKind::Text),
        ("q", ParamKind::Text),
    ],
};

const SECURITY: EndpointSpec = EndpointSpec {
    path_template: "/securities/__SECCODE__.json",
    path_params: &[placeholder::SECCODE],
    query_params: &[],
};

const HISTORY_QUOTES: EndpointSpec = EndpointSpec {
    path_template: "/history/engines/__ENGINE__/markets/__MARKET__/boards/__BOARD__/securities/__SECCODE__.json",
    path_params: &[
        placeholder::ENGINE,
        placeholder::MARKET,
        placeholder::BOARD,
        placeholder::SECCODE,
    ],
    query_params: &[
        ("from", ParamKind::Date),
        ("till", ParamKind::Date),
        ("start", ParamKind::Integer),
        ("tradingsession", ParamKind::Integer),
        ("limit", ParamKind::Integer),
    ],
};

const CANDLE_QUOTES: EndpointSpec = EndpointSpec {
    path_template: "/engines/__ENGINE__/markets/__MARKET__/boards/__BOARD__/securities/__SECCODE__/candles.json",
    path_params: &[
        placeholder::ENGINE,
        placeholder::MARKET,
        placeholder::BOARD,
        placeholder::SECCODE,
    ],
    query_params: &[
        ("from", ParamKind::Date),
        ("till", ParamKind::Date),
        ("interval", ParamKind::Integer),
        ("start", ParamKind::Integer),
    ],
};

/// The closed set of requests the client can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// List of trading engines.
    Engines,
    /// List of markets for an engine.
    Markets,
    /// Full securities listing.
    SecuritiesAll,
    /// Securities listing narrowed to one engine.
    SecuritiesForEngine,
    /// Securities listing narrowed to one engine and market.
    SecuritiesForMarket,
    /// Securities listing matched against a search string.
    SecuritiesSearch,
    /// Detail card of one security.
    Security,
    /// Daily history quotes for one security on one board.
    HistoryQuotes,
    /// OHLC candles for one security on one board.
    CandleQuotes,
}

impl RequestKind {
    /// Returns the endpoint description for this request kind.
    #[must_use]
    pub const fn spec(self) -> &'static EndpointSpec {
        match self {
            Self::Engines => &ENGINES,
            Self::Markets => &MARKETS,
            Self::SecuritiesAll => &SECURITIES_ALL,
            Self::SecuritiesForEngine => &SECURITIES_FOR_ENGINE,
            Self::SecuritiesForMarket => &SECURITIES_FOR_MARKET,
            Self::SecuritiesSearch => &SECURITIES_SEARCH,
            Self::Security => &SECURITY,
            Self::HistoryQuotes => &HISTORY_QUOTES,
            Self::CandleQuotes => &CANDLE_QUOTES,
        }
    }

    /// Returns all request kinds.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Engines,
            Self::Markets,
            Self::SecuritiesAll,
            Self::SecuritiesForEngine,
            Self::SecuritiesForMarket,
            Self::SecuritiesSearch,
            Self::Security,
            Self::HistoryQuotes,
            Self::CandleQuotes,
        ]
    }
}
