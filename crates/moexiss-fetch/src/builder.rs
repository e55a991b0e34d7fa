//! Request URL construction and query encoding.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use moexiss_endpoints::{ParamKind, RequestKind};
use moexiss_types::{MoexError, Result};

/// Path placeholder substitutions, keyed by placeholder name.
pub type PathValues = BTreeMap<String, String>;

/// Typed query parameter values, keyed by parameter name.
pub type QueryValues = BTreeMap<String, ParamValue>;

/// Defaults merged into every request: metadata off, extended JSON shape.
pub const BASE_QUERY: &[(&str, &str)] = &[("iss.meta", "off"), ("iss.json", "extended")];

/// A typed query parameter value.
///
/// Each endpoint declares the value format it accepts per parameter; a
/// mismatching variant is rejected at build time instead of being
/// stringified into a broken request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Calendar date, formatted `YYYY-MM-DD` on the wire.
    Date(NaiveDate),
    /// Integer, formatted as a decimal string on the wire.
    Integer(i64),
    /// Plain string, passed through as-is.
    Text(String),
}

impl From<NaiveDate> for ParamValue {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A fully built request: the complete URL and the encoded query part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltRequest {
    /// Absolute URL including the query string.
    pub url: String,
    /// The form-encoded query string alone.
    pub query: String,
}

/// Builds the request URL for an endpoint.
///
/// Supplied placeholders are substituted textually into the path
/// template; a placeholder without a supplied value stays in the path
/// verbatim, so callers must supply every placeholder the endpoint
/// declares. Query values whose name the endpoint does not accept are
/// dropped silently (the catalog is the contract, not the caller), the
/// rest are formatted per their declared kind and merged into a fresh
/// copy of [`BASE_QUERY`], overwriting defaults on key collision.
///
/// # Errors
///
/// Returns [`MoexError::ParameterType`] when a supplied value's variant
/// does not match the format the endpoint declares for that parameter.
pub fn build(
    base_url: &str,
    kind: RequestKind,
    path_values: &PathValues,
    query_values: &QueryValues,
) -> Result<BuiltRequest> {
    let spec = kind.spec();

    let mut path = spec.path_template.to_string();
    for (name, value) in path_values {
        if spec.declares_placeholder(name) {
            path = path.replace(name.as_str(), value);
        } else {
            tracing::debug!(placeholder = %name, ?kind, "dropping undeclared path value");
        }
    }

    let mut merged: BTreeMap<&str, String> = BASE_QUERY
        .iter()
        .map(|(name, value)| (*name, (*value).to_string()))
        .collect();
    for (name, value) in query_values {
        match spec.query_kind(name) {
            Some(param_kind) => {
                merged.insert(name.as_str(), format_param(name, value, param_kind)?);
            }
            None => {
                tracing::debug!(param = %name, ?kind, "dropping parameter not accepted by endpoint");
            }
        }
    }

    let query = merged
        .iter()
        .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    Ok(BuiltRequest {
        url: format!("{base_url}{path}?{query}"),
        query,
    })
}

fn format_param(name: &str, value: &ParamValue, kind: ParamKind) -> Result<String> {
    match (kind, value) {
        (ParamKind::Date, ParamValue::Date(date)) => Ok(date.format("%Y-%m-%d").to_string()),
        (ParamKind::Integer, ParamValue::Integer(value)) => Ok(value.to_string()),
        (ParamKind::Text, ParamValue::Text(value)) => Ok(value.clone()),
        (expected, _) => Err(MoexError::ParameterType {
            name: name.to_string(),
            expected: expected.as_str(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moexiss_endpoints::{BASE_URL, placeholder};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_build_substitutes_placeholders() {
        let mut path_values = PathValues::new();
        path_values.insert(placeholder::ENGINE.to_string(), String::from("stock"));
        path_values.insert(placeholder::MARKET.to_string(), String::from("shares"));
        path_values.insert(placeholder::BOARD.to_string(), String::from("TQBR"));
        path_values.insert(placeholder::SECCODE.to_string(), String::from("GAZP"));

        let mut query_values = QueryValues::new();
        query_values.insert(String::from("from"), ParamValue::Date(d(2021, 5, 1)));
        query_values.insert(String::from("till"), ParamValue::Date(d(2021, 5, 31)));

        let built = build(BASE_URL, RequestKind::HistoryQuotes, &path_values, &query_values).unwrap();
        assert_eq!(
            built.url,
            "https://iss.moex.com/iss/history/engines/stock/markets/shares/boards/TQBR/securities/GAZP.json\
             ?from=2021-05-01&iss.json=extended&iss.meta=off&till=2021-05-31"
        );
    }

    #[test]
    fn test_build_leaves_unsupplied_placeholders_verbatim() {
        let mut path_values = PathValues::new();
        path_values.insert(placeholder::ENGINE.to_string(), String::from("stock"));

        let built = build(BASE_URL, RequestKind::HistoryQuotes, &path_values, &QueryValues::new())
            .unwrap();
        assert!(built.url.contains("/engines/stock/"));
        assert!(built.url.contains("__MARKET__"));
        assert!(built.url.contains("__SECCODE__"));
    }

    #[test]
    fn test_build_drops_unknown_query_keys() {
        let mut query_values = QueryValues::new();
        query_values.insert(String::from("bogus"), ParamValue::Integer(1));

        let with_bogus =
            build(BASE_URL, RequestKind::SecuritiesAll, &PathValues::new(), &query_values).unwrap();
        let without =
            build(BASE_URL, RequestKind::SecuritiesAll, &PathValues::new(), &QueryValues::new())
                .unwrap();
        assert_eq!(with_bogus, without);
    }

    #[test]
    fn test_build_always_carries_defaults() {
        let built =
            build(BASE_URL, RequestKind::Engines, &PathValues::new(), &QueryValues::new()).unwrap();
        assert_eq!(
            built.url,
            "https://iss.moex.com/iss/engines.json?iss.json=extended&iss.meta=off"
        );
    }

    #[test]
    fn test_build_rejects_mismatched_value_kind() {
        let mut query_values = QueryValues::new();
        query_values.insert(String::from("from"), ParamValue::Text(String::from("yesterday")));

        let result =
            build(BASE_URL, RequestKind::HistoryQuotes, &PathValues::new(), &query_values);
        assert!(matches!(
            result,
            Err(MoexError::ParameterType { expected: "date", .. })
        ));
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let mut query_values = QueryValues::new();
        query_values.insert(String::from("q"), ParamValue::from("Сбербанк ао"));

        let built =
            build(BASE_URL, RequestKind::SecuritiesSearch, &PathValues::new(), &query_values)
                .unwrap();
        assert!(built.query.contains("q=%D0%A1%D0%B1%D0%B5%D1%80%D0%B1%D0%B0%D0%BD%D0%BA%20%D0%B0%D0%BE"));
    }

    #[test]
    fn test_date_format_round_trips() {
        let date = d(2021, 5, 3);
        let mut query_values = QueryValues::new();
        query_values.insert(String::from("from"), ParamValue::Date(date));

        let built =
            build(BASE_URL, RequestKind::HistoryQuotes, &PathValues::new(), &query_values).unwrap();
        let encoded = built
            .query
            .split('&')
            .find_map(|pair| pair.strip_prefix("from="))
            .unwrap()
            .to_string();
        assert_eq!(NaiveDate::parse_from_str(&encoded, "%Y-%m-%d").unwrap(), date);
    }
}
