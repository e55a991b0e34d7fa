//! Security detail lookup.

use std::collections::HashMap;

use serde_json::{Map, Value};

use moexiss_fetch::api;
use moexiss_fetch::extract::{date_field, find_block, i64_field, str_field};
use moexiss_fetch::IssTransport;
use moexiss_types::{BoardInfo, MoexError, Result, Security};

/// Loads the detail card of one security: descriptive metadata plus the
/// boards it is listed on.
///
/// The description block is scanned for the SHORTNAME, FACEVALUE and
/// FACEUNIT attributes; every other attribute is ignored. The board
/// flagged `is_primary` becomes the primary board; when several boards
/// carry the flag the last one in server order wins.
///
/// # Errors
///
/// Returns [`MoexError::SecurityNotFound`] when the server reports
/// neither description nor board rows for the ticker, and a transport
/// error when the fetch itself fails.
pub fn load_security<T: IssTransport + ?Sized>(transport: &T, seccode: &str) -> Result<Security> {
    let doc = api::security_detail(transport, seccode)?;
    let empty = Vec::new();
    let description_rows = find_block(&doc, "description").unwrap_or(&empty);
    let board_rows = find_block(&doc, "boards").unwrap_or(&empty);
    if description_rows.is_empty() && board_rows.is_empty() {
        return Err(MoexError::SecurityNotFound(seccode.to_string()));
    }

    let mut security = Security {
        seccode: seccode.to_string(),
        shortname: None,
        face_value: None,
        face_currency: None,
        main_board: None,
        boards: HashMap::new(),
    };

    for row in description_rows {
        let Some(row) = row.as_object() else { continue };
        match str_field(row, "name") {
            Some("SHORTNAME") => security.shortname = value_text(row),
            Some("FACEVALUE") => security.face_value = value_text(row),
            Some("FACEUNIT") => security.face_currency = value_text(row),
            _ => {}
        }
    }

    for row in board_rows {
        let Some(row) = row.as_object() else { continue };
        let Some(boardid) = str_field(row, "boardid") else { continue };
        security.boards.insert(
            boardid.to_string(),
            BoardInfo {
                history_from: date_field(row, "history_from"),
                history_till: date_field(row, "history_till"),
                engine: str_field(row, "engine").unwrap_or_default().to_string(),
                market: str_field(row, "market").unwrap_or_default().to_string(),
                title: str_field(row, "title").unwrap_or_default().to_string(),
            },
        );
        if i64_field(row, "is_primary") == Some(1) {
            security.main_board = Some(boardid.to_string());
        }
    }

    Ok(security)
}

/// Reads the `value` column of a description row, which the server
/// serializes as a string for most attribute types but as a number for
/// some.
fn value_text(row: &Map<String, Value>) -> Option<String> {
    match row.get("value")? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use chrono::NaiveDate;
    use serde_json::json;

    use moexiss_types::TransportError;

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

    fn detail_doc() -> Value {
        json!([
            {"description": [
                {"name": "SECID", "title": "Код ценной бумаги", "value": "GAZP"},
                {"name": "SHORTNAME", "title": "Краткое наименование", "value": "ГАЗПРОМ ао"},
                {"name": "FACEVALUE", "title": "Номинальная стоимость", "value": "5"},
                {"name": "FACEUNIT", "title": "Валюта номинала", "value": "SUR"}
            ]},
            {"boards": [
                {"boardid": "SMAL", "engine": "stock", "market": "shares",
                 "title": "Т+: Неполные лоты (акции) - безадрес.",
                 "is_primary": 0,
                 "history_from": "2011-11-21", "history_till": "2024-01-15"},
                {"boardid": "TQBR", "engine": "stock", "market": "shares",
                 "title": "Т+: Акции и ДР - безадрес.",
                 "is_primary": 1,
                 "history_from": "2014-06-09", "history_till": "2024-01-15"}
            ]}
        ])
    }

    #[test]
    fn test_load_security_description() {
        let transport = Static::new(detail_doc());
        let security = load_security(&transport, "GAZP").unwrap();

        assert_eq!(security.seccode, "GAZP");
        assert_eq!(security.shortname.as_deref(), Some("ГАЗПРОМ ао"));
        assert_eq!(security.face_value.as_deref(), Some("5"));
        assert_eq!(security.face_currency.as_deref(), Some("SUR"));
        assert!(transport.urls.borrow()[0].contains("/securities/GAZP.json"));
    }

    #[test]
    fn test_load_security_boards() {
        let transport = Static::new(detail_doc());
        let security = load_security(&transport, "GAZP").unwrap();

        assert_eq!(security.boards.len(), 2);
        assert_eq!(security.main_board.as_deref(), Some("TQBR"));
        let board = security.board("TQBR").unwrap();
        assert_eq!(board.history_from, NaiveDate::from_ymd_opt(2014, 6, 9));
        assert_eq!(board.engine, "stock");
        assert_eq!(board.market, "shares");
    }

    #[test]
    fn test_load_security_null_window_is_unbounded() {
        let transport = Static::new(json!([
            {"boards": [
                {"boardid": "TQBR", "engine": "stock", "market": "shares",
                 "title": "", "is_primary": 1,
                 "history_from": null, "history_till": null}
            ]}
        ]));

        let security = load_security(&transport, "NEWB").unwrap();
        let board = security.board("TQBR").unwrap();
        assert_eq!(board.history_from, None);
        assert_eq!(board.history_till, None);
    }

    #[test]
    fn test_load_security_last_primary_flag_wins() {
        let transport = Static::new(json!([
            {"boards": [
                {"boardid": "AAAA", "engine": "stock", "market": "shares",
                 "title": "", "is_primary": 1, "history_from": null, "history_till": null},
                {"boardid": "BBBB", "engine": "stock", "market": "shares",
                 "title": "", "is_primary": 1, "history_from": null, "history_till": null}
            ]}
        ]));

        let security = load_security(&transport, "DUPE").unwrap();
        assert_eq!(security.main_board.as_deref(), Some("BBBB"));
    }

    #[test]
    fn test_load_security_not_found() {
        let transport = Static::new(json!([
            {"description": []},
            {"boards": []}
        ]));

        assert!(matches!(
            load_security(&transport, "NOPE"),
            Err(MoexError::SecurityNotFound(_))
        ));
    }
}
