//! Extended-JSON document and row helpers.
//!
//! ISS extended documents are a top-level array of single-key blocks,
//! each mapping a block name ("securities", "history", "boards", ...)
//! to an array of row objects. Consumers pull the one block they need
//! and ignore the rest.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

/// Locates the named block in an extended-JSON document.
///
/// Returns None when the document carries no such block, which callers
/// treat as an empty page rather than an error.
#[must_use]
pub fn find_block<'a>(doc: &'a Value, name: &str) -> Option<&'a Vec<Value>> {
    doc.as_array()?
        .iter()
        .find_map(|item| item.as_object()?.get(name)?.as_array())
}

/// Reads a string field from a row.
#[must_use]
pub fn str_field<'a>(row: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    row.get(name)?.as_str()
}

/// Reads a numeric field from a row, accepting numbers and numeric
/// strings.
#[must_use]
pub fn f64_field(row: &Map<String, Value>, name: &str) -> Option<f64> {
    match row.get(name)? {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

/// Reads an integer field from a row, accepting numbers and numeric
/// strings.
#[must_use]
pub fn i64_field(row: &Map<String, Value>, name: &str) -> Option<i64> {
    match row.get(name)? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

/// Reads a `YYYY-MM-DD` date field from a row.
#[must_use]
pub fn date_field(row: &Map<String, Value>, name: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(str_field(row, name)?, "%Y-%m-%d").ok()
}

/// Reads a `YYYY-MM-DD HH:MM:SS` date-time field from a row.
#[must_use]
pub fn datetime_field(row: &Map<String, Value>, name: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(str_field(row, name)?, "%Y-%m-%d %H:%M:%S").ok()
}
