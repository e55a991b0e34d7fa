//! Typed operations over the ISS endpoints.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use moexiss_endpoints::{RequestKind, placeholder};
use moexiss_types::{
    Candle, CandlePeriod, DateRange, EngineRecord, HistoryQuote, MarketRecord, Result,
    SecurityRecord, TradingFilter, TradingSession,
};

use crate::builder::{self, ParamValue, PathValues, QueryValues};
use crate::client::IssTransport;
use crate::extract::{date_field, datetime_field, f64_field, find_block};
use crate::pages::{PAGE_LIMIT, Paged, fetch_all_pages};

/// Issues one non-paginated request and returns the decoded document.
fn fetch_doc<T: IssTransport + ?Sized>(
    transport: &T,
    kind: RequestKind,
    path_values: &PathValues,
) -> Result<Value> {
    let built = builder::build(transport.base_url(), kind, path_values, &QueryValues::new())?;
    Ok(transport.get_json(&built.url)?)
}

/// Deserializes every row object of a block, dropping rows that do not
/// fit the record schema.
fn deserialize_rows<R: DeserializeOwned>(rows: Option<&Vec<Value>>) -> Vec<R> {
    rows.map(|rows| {
        rows.iter()
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .collect()
    })
    .unwrap_or_default()
}

/// Fetches the list of trading engines.
///
/// # Errors
///
/// Returns an error when the request cannot be built or the fetch fails.
pub fn engines<T: IssTransport + ?Sized>(transport: &T) -> Result<Vec<EngineRecord>> {
    let doc = fetch_doc(transport, RequestKind::Engines, &PathValues::new())?;
    Ok(deserialize_rows(find_block(&doc, "engines")))
}

/// Fetches the list of markets for an engine.
///
/// # Errors
///
/// Returns an error when the request cannot be built or the fetch fails.
pub fn markets<T: IssTransport + ?Sized>(transport: &T, engine: &str) -> Result<Vec<MarketRecord>> {
    let mut path_values = PathValues::new();
    path_values.insert(placeholder::ENGINE.to_string(), engine.to_string());
    let doc = fetch_doc(transport, RequestKind::Markets, &path_values)?;
    Ok(deserialize_rows(find_block(&doc, "markets")))
}

/// Fetches the raw detail document of one security.
///
/// # Errors
///
/// Returns an error when the request cannot be built or the fetch fails.
pub fn security_detail<T: IssTransport + ?Sized>(transport: &T, seccode: &str) -> Result<Value> {
    let mut path_values = PathValues::new();
    path_values.insert(placeholder::SECCODE.to_string(), seccode.to_string());
    fetch_doc(transport, RequestKind::Security, &path_values)
}

/// Selection of a securities listing: trading filter, optional
/// engine/market narrowing, optional search text.
///
/// The request kind is chosen the way the listing endpoint variants are
/// laid out: search text wins, then a market narrows its engine, then an
/// engine alone, then the full listing. Narrowings that do not apply to
/// the chosen variant are dropped at build time.
#[derive(Debug, Clone, Default)]
pub struct SecuritiesQuery {
    filter: TradingFilter,
    engine: Option<String>,
    market: Option<String>,
    search: Option<String>,
}

impl SecuritiesQuery {
    /// Creates a query for the full listing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the listing to traded or non-traded securities.
    #[must_use]
    pub fn trading(mut self, filter: TradingFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Narrows the listing to one engine.
    #[must_use]
    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = Some(engine.into());
        self
    }

    /// Narrows the listing to one market (meaningful with an engine).
    #[must_use]
    pub fn market(mut self, market: impl Into<String>) -> Self {
        self.market = Some(market.into());
        self
    }

    /// Matches securities against a name or ticker fragment.
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    fn request_kind(&self) -> RequestKind {
        if self.search.is_some() {
            RequestKind::SecuritiesSearch
        } else if self.engine.is_some() && self.market.is_some() {
            RequestKind::SecuritiesForMarket
        } else if self.engine.is_some() {
            RequestKind::SecuritiesForEngine
        } else {
            RequestKind::SecuritiesAll
        }
    }

    fn query_values(&self) -> QueryValues {
        let mut values = QueryValues::new();
        values.insert(String::from("is_trading"), ParamValue::from(self.filter.as_str()));
        if let Some(engine) = &self.engine {
            values.insert(String::from("engine"), ParamValue::from(engine.as_str()));
        }
        if let Some(market) = &self.market {
            values.insert(String::from("market"), ParamValue::from(market.as_str()));
        }
        if let Some(search) = &self.search {
            values.insert(String::from("q"), ParamValue::from(search.as_str()));
        }
        values
    }
}

/// Walks the securities listing selected by the query.
///
/// # Errors
///
/// Returns an error only for request-construction failures; transport
/// failures mid-walk leave a partial result with [`Paged::error`] set.
pub fn securities<T: IssTransport + ?Sized>(
    transport: &T,
    query: &SecuritiesQuery,
) -> Result<Paged<SecurityRecord>> {
    fetch_all_pages(
        transport,
        query.request_kind(),
        &PathValues::new(),
        &query.query_values(),
        "securities",
        shape_security_record,
    )
}

/// Searches securities by a name or ticker fragment.
///
/// # Errors
///
/// See [`securities`].
pub fn search_securities<T: IssTransport + ?Sized>(
    transport: &T,
    text: &str,
    filter: TradingFilter,
) -> Result<Paged<SecurityRecord>> {
    securities(transport, &SecuritiesQuery::new().trading(filter).search(text))
}

/// Lists local bonds (stock engine, bonds market).
///
/// # Errors
///
/// See [`securities`].
pub fn bonds<T: IssTransport + ?Sized>(
    transport: &T,
    filter: TradingFilter,
) -> Result<Paged<SecurityRecord>> {
    securities(
        transport,
        &SecuritiesQuery::new().trading(filter).engine("stock").market("bonds"),
    )
}

/// Lists local shares (stock engine, shares market).
///
/// # Errors
///
/// See [`securities`].
pub fn shares<T: IssTransport + ?Sized>(
    transport: &T,
    filter: TradingFilter,
) -> Result<Paged<SecurityRecord>> {
    securities(
        transport,
        &SecuritiesQuery::new().trading(filter).engine("stock").market("shares"),
    )
}

/// Walks the daily history quotes of one security on one board.
///
/// # Errors
///
/// See [`securities`].
pub fn history_quotes<T: IssTransport + ?Sized>(
    transport: &T,
    engine: &str,
    market: &str,
    board: &str,
    seccode: &str,
    range: DateRange,
    session: TradingSession,
) -> Result<Paged<HistoryQuote>> {
    let path_values = quote_path(engine, market, board, seccode);
    let mut query_values = QueryValues::new();
    query_values.insert(String::from("from"), ParamValue::Date(range.from));
    query_values.insert(String::from("till"), ParamValue::Date(range.till));
    query_values.insert(String::from("tradingsession"), ParamValue::Integer(session.code()));
    query_values.insert(String::from("limit"), ParamValue::Integer(PAGE_LIMIT as i64));
    fetch_all_pages(
        transport,
        RequestKind::HistoryQuotes,
        &path_values,
        &query_values,
        "history",
        shape_history_row,
    )
}

/// Walks the OHLC candles of one security on one board.
///
/// # Errors
///
/// See [`securities`].
pub fn candle_quotes<T: IssTransport + ?Sized>(
    transport: &T,
    engine: &str,
    market: &str,
    board: &str,
    seccode: &str,
    range: DateRange,
    period: CandlePeriod,
) -> Result<Paged<Candle>> {
    let path_values = quote_path(engine, market, board, seccode);
    let mut query_values = QueryValues::new();
    query_values.insert(String::from("from"), ParamValue::Date(range.from));
    query_values.insert(String::from("till"), ParamValue::Date(range.till));
    query_values.insert(String::from("interval"), ParamValue::Integer(period.code()));
    fetch_all_pages(
        transport,
        RequestKind::CandleQuotes,
        &path_values,
        &query_values,
        "candles",
        shape_candle_row,
    )
}

fn quote_path(engine: &str, market: &str, board: &str, seccode: &str) -> PathValues {
    let mut path_values = PathValues::new();
    path_values.insert(placeholder::ENGINE.to_string(), engine.to_string());
    path_values.insert(placeholder::MARKET.to_string(), market.to_string());
    path_values.insert(placeholder::BOARD.to_string(), board.to_string());
    path_values.insert(placeholder::SECCODE.to_string(), seccode.to_string());
    path_values
}

fn shape_security_record(row: &Map<String, Value>) -> Option<SecurityRecord> {
    serde_json::from_value(Value::Object(row.clone())).ok()
}

/// Reduces a raw history row to the published schema.
///
/// The server reports turnover and volume under instrument-dependent
/// columns; the renamed source columns (VOLRUR, VOLUME, YIELDCLOSE)
/// supersede the literal ones when both appear in a row.
fn shape_history_row(row: &Map<String, Value>) -> Option<HistoryQuote> {
    Some(HistoryQuote {
        trade_date: date_field(row, "TRADEDATE")?,
        open: f64_field(row, "OPEN"),
        high: f64_field(row, "HIGH"),
        low: f64_field(row, "LOW"),
        close: f64_field(row, "CLOSE"),
        yield_rate: f64_field(row, "YIELDCLOSE").or_else(|| f64_field(row, "YIELD")),
        duration: f64_field(row, "DURATION"),
        value: f64_field(row, "VOLRUR").or_else(|| f64_field(row, "VALUE")),
        quantity: f64_field(row, "VOLUME"),
        waprice: f64_field(row, "WAPRICE"),
    })
}

/// Reduces a raw candle row to the published schema.
fn shape_candle_row(row: &Map<String, Value>) -> Option<Candle> {
    Some(Candle {
        begin: datetime_field(row, "begin")?,
        end: datetime_field(row, "end")?,
        open: f64_field(row, "open")?,
        high: f64_field(row, "high")?,
        low: f64_field(row, "low")?,
        close: f64_field(row, "close")?,
        value: f64_field(row, "value")?,
        quantity: f64_field(row, "volume")?,
    })
}
