//! Offset pagination over list-returning endpoints.

use serde_json::{Map, Value};

use moexiss_endpoints::RequestKind;
use moexiss_types::{Result, TransportError};

use crate::builder::{self, ParamValue, PathValues, QueryValues};
use crate::client::IssTransport;
use crate::extract::find_block;

/// Rows per page; the server caps list responses at this size.
pub const PAGE_LIMIT: usize = 100;

/// Advancing offset into a paginated result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageCursor {
    offset: u64,
}

impl PageCursor {
    /// Returns a cursor at the first page.
    #[must_use]
    pub const fn start() -> Self {
        Self { offset: 0 }
    }

    /// Returns the current offset.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Advances the cursor by one full page.
    pub const fn advance(&mut self) {
        self.offset += PAGE_LIMIT as u64;
    }
}

/// Accumulated rows of a paginated fetch.
///
/// Pagination is fail-soft: a transport failure mid-sequence stops the
/// walk and leaves the pages fetched so far in `rows`, with the failure
/// recorded in `error`. An empty, complete result therefore really means
/// "no data"; check [`Paged::is_complete`] to tell the two apart.
#[derive(Debug, Clone)]
pub struct Paged<R> {
    /// The accumulated, shaped rows in server order.
    pub rows: Vec<R>,
    /// The transport failure that cut the walk short, if any.
    pub error: Option<TransportError>,
    /// Number of page requests performed.
    pub pages: u32,
}

impl<R> Paged<R> {
    /// Returns true when every page was fetched without a failure.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the number of accumulated rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows were accumulated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consumes the result, returning the rows alone.
    #[must_use]
    pub fn into_rows(self) -> Vec<R> {
        self.rows
    }
}

/// Walks all pages of a list-returning endpoint into one result set.
///
/// Each iteration merges the cursor offset as `start` into a fresh copy
/// of the query values, fetches one page, and shapes every row object of
/// the named block through `shape` (rows the shaper rejects are dropped
/// without affecting pagination). The walk continues only while a page
/// returns exactly [`PAGE_LIMIT`] raw rows; a total that is an exact
/// multiple of the page size therefore costs one extra request that
/// returns a short or empty page. A document without the named block
/// ends the walk as an empty page, not an error.
///
/// # Errors
///
/// Returns an error only for request-construction failures. Transport
/// failures do not unwind: the partial accumulation is returned with
/// [`Paged::error`] set.
pub fn fetch_all_pages<T, R, F>(
    transport: &T,
    kind: RequestKind,
    path_values: &PathValues,
    query_values: &QueryValues,
    block: &str,
    shape: F,
) -> Result<Paged<R>>
where
    T: IssTransport + ?Sized,
    F: Fn(&Map<String, Value>) -> Option<R>,
{
    let mut cursor = PageCursor::start();
    let mut result = Paged {
        rows: Vec::new(),
        error: None,
        pages: 0,
    };

    loop {
        let mut page_query = query_values.clone();
        page_query.insert(String::from("start"), ParamValue::Integer(cursor.offset() as i64));
        let built = builder::build(transport.base_url(), kind, path_values, &page_query)?;

        result.pages += 1;
        let doc = match transport.get_json(&built.url) {
            Ok(doc) => doc,
            Err(error) => {
                tracing::warn!(
                    %error,
                    ?kind,
                    offset = cursor.offset(),
                    "page fetch failed, returning partial result"
                );
                result.error = Some(error);
                break;
            }
        };

        let Some(rows) = find_block(&doc, block) else {
            break;
        };
        for row in rows {
            let Some(object) = row.as_object() else { continue };
            if let Some(shaped) = shape(object) {
                result.rows.push(shaped);
            }
        }

        if rows.len() == PAGE_LIMIT {
            cursor.advance();
        } else {
            break;
        }
    }

    Ok(result)
}
