//! History-quote and candle series assembly.
//!
//! These operations resolve the target board of a [`Security`], clamp
//! the requested date range to that board's availability window, and
//! walk the paginated history/candle endpoints.

use moexiss_fetch::api;
use moexiss_fetch::{IssTransport, Paged};
use moexiss_types::{
    Candle, CandlePeriod, DateRange, HistoryQuote, Result, Security, TradingSession,
};

/// Fetches the daily history quotes of a security, in server order.
///
/// The board defaults to the security's primary board; the range is
/// clamped to the board's availability window (an unbounded side leaves
/// the caller's bound untouched).
///
/// # Errors
///
/// Returns an error when the board cannot be resolved; transport
/// failures mid-walk leave a partial result with [`Paged::error`] set.
pub fn history_quotes<T: IssTransport + ?Sized>(
    transport: &T,
    security: &Security,
    range: DateRange,
    board: Option<&str>,
    session: TradingSession,
) -> Result<Paged<HistoryQuote>> {
    let (board_id, info) = security.resolve_board(board)?;
    let effective = range.clamp_to(info.history_from, info.history_till);
    api::history_quotes(
        transport,
        &info.engine,
        &info.market,
        board_id,
        &security.seccode,
        effective,
        session,
    )
}

/// Fetches the daily history quotes of a security, sorted by trade date
/// ascending.
///
/// # Errors
///
/// See [`history_quotes`].
pub fn history_quotes_sorted<T: IssTransport + ?Sized>(
    transport: &T,
    security: &Security,
    range: DateRange,
    board: Option<&str>,
    session: TradingSession,
) -> Result<Paged<HistoryQuote>> {
    let mut paged = history_quotes(transport, security, range, board, session)?;
    paged.rows.sort_by_key(|row| row.trade_date);
    Ok(paged)
}

/// Fetches the OHLC candles of a security, in server order.
///
/// Board resolution and range clamping work as in [`history_quotes`].
///
/// # Errors
///
/// See [`history_quotes`].
pub fn candle_quotes<T: IssTransport + ?Sized>(
    transport: &T,
    security: &Security,
    range: DateRange,
    board: Option<&str>,
    period: CandlePeriod,
) -> Result<Paged<Candle>> {
    let (board_id, info) = security.resolve_board(board)?;
    let effective = range.clamp_to(info.history_from, info.history_till);
    api::candle_quotes(
        transport,
        &info.engine,
        &info.market,
        board_id,
        &security.seccode,
        effective,
        period,
    )
}

/// Fetches the OHLC candles of a security, sorted by interval start
/// ascending.
///
/// # Errors
///
/// See [`history_quotes`].
pub fn candle_quotes_sorted<T: IssTransport + ?Sized>(
    transport: &T,
    security: &Security,
    range: DateRange,
    board: Option<&str>,
    period: CandlePeriod,
) -> Result<Paged<Candle>> {
    let mut paged = candle_quotes(transport, security, range, board, period)?;
    paged.rows.sort_by_key(|row| row.begin);
    Ok(paged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    use chrono::NaiveDate;
    use serde_json::{Value, json};

    use moexiss_types::{BoardInfo, MoexError, TransportError};

    struct Static {
        doc: Value,
        urls: RefCell<Vec<String>>,
    }

    impl Static {
        fn new(doc: Value) -> Self {
            Self {
                doc,
                urls: RefCell::new(Vec::new()),
            }
        }
    }

    impl IssTransport for Static {
        fn get_json(&self, url: &str) -> std::result::Result<Value, TransportError> {
            self.urls.borrow_mut().push(url.to_string());
            Ok(self.doc.clone())
        }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn sample_security() -> Security {
        let mut boards = HashMap::new();
        boards.insert(
            String::from("TQBR"),
            BoardInfo {
                history_from: Some(d(2020, 1, 1)),
                history_till: Some(d(2021, 1, 1)),
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

    fn history_doc() -> Value {
        json!([
            {"history": [
                {"TRADEDATE": "2020-06-02", "CLOSE": 195.0, "VOLRUR": 2000.0},
                {"TRADEDATE": "2020-06-01", "CLOSE": 194.0, "VOLRUR": 1000.0}
            ]}
        ])
    }

    #[test]
    fn test_history_range_is_clamped_to_board_window() {
        let transport = Static::new(history_doc());
        let range = DateRange::new(d(2019, 1, 1), d(2022, 1, 1)).unwrap();

        history_quotes(&transport, &sample_security(), range, None, TradingSession::Main)
            .unwrap();

        let url = transport.urls.borrow()[0].clone();
        assert!(url.contains("from=2020-01-01"));
        assert!(url.contains("till=2021-01-01"));
    }

    #[test]
    fn test_history_defaults_to_primary_board() {
        let transport = Static::new(history_doc());
        let range = DateRange::new(d(2020, 6, 1), d(2020, 6, 30)).unwrap();

        history_quotes(&transport, &sample_security(), range, None, TradingSession::Main)
            .unwrap();
        assert!(
            transport.urls.borrow()[0]
                .contains("/engines/stock/markets/shares/boards/TQBR/securities/GAZP.json")
        );
    }

    #[test]
    fn test_history_unknown_board_is_an_error() {
        let transport = Static::new(history_doc());
        let range = DateRange::new(d(2020, 6, 1), d(2020, 6, 30)).unwrap();

        let result = history_quotes(
            &transport,
            &sample_security(),
            range,
            Some("SMAL"),
            TradingSession::Main,
        );
        assert!(matches!(result, Err(MoexError::UnknownBoard { .. })));
        assert!(transport.urls.borrow().is_empty());
    }

    #[test]
    fn test_history_sorted_orders_by_trade_date() {
        let transport = Static::new(history_doc());
        let range = DateRange::new(d(2020, 6, 1), d(2020, 6, 30)).unwrap();

        let unsorted =
            history_quotes(&transport, &sample_security(), range, None, TradingSession::Main)
                .unwrap();
        assert_eq!(unsorted.rows[0].trade_date, d(2020, 6, 2));

        let sorted = history_quotes_sorted(
            &transport,
            &sample_security(),
            range,
            None,
            TradingSession::Main,
        )
        .unwrap();
        assert_eq!(sorted.rows[0].trade_date, d(2020, 6, 1));
        assert_eq!(sorted.rows[1].trade_date, d(2020, 6, 2));
    }

    #[test]
    fn test_candles_sorted_orders_by_begin() {
        let transport = Static::new(json!([
            {"candles": [
                {"begin": "2020-06-01 11:00:00", "end": "2020-06-01 12:00:00",
                 "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5,
                 "value": 10.0, "volume": 3},
                {"begin": "2020-06-01 10:00:00", "end": "2020-06-01 11:00:00",
                 "open": 1.0, "high": 2.0, "low": 0.5, "close": 1.5,
                 "value": 10.0, "volume": 3}
            ]}
        ]));
        let range = DateRange::new(d(2020, 6, 1), d(2020, 6, 30)).unwrap();

        let sorted = candle_quotes_sorted(
            &transport,
            &sample_security(),
            range,
            None,
            CandlePeriod::Hour1,
        )
        .unwrap();
        assert_eq!(
            sorted.rows[0].begin,
            d(2020, 6, 1).and_hms_opt(10, 0, 0).unwrap()
        );
        let url = transport.urls.borrow()[0].clone();
        assert!(url.contains("interval=60"));
    }
}
