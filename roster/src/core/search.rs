//! National-id lookup over a loaded record store

use shared::{PersonRecord, RecordStore, SearchError};
use tracing::debug;

/// Find the record whose national id matches the query
///
/// The query is trimmed and stripped of '.' and '-' before comparison.
/// Stored ids were stripped of every non-digit at load time, so a query
/// carrying other separators (spaces, slashes) will not match; queries in
/// the standard punctuated form and bare digit strings both do.
///
/// When several rows share an id, the earliest row wins.
pub fn find_by_national_id<'a>(
    store: &'a RecordStore,
    query: &str,
) -> Result<&'a PersonRecord, SearchError> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Err(SearchError::InvalidQuery);
    }

    let normalized: String = trimmed.chars().filter(|c| *c != '.' && *c != '-').collect();

    match store
        .records()
        .iter()
        .find(|record| record.national_id == normalized)
    {
        Some(record) => Ok(record),
        None => {
            debug!(query = %normalized, "national id not found");
            Err(SearchError::NotFound)
        }
    }
}
