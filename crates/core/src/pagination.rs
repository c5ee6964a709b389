//! Forward cursor pagination over an ordered sequence.
//!
//! Cursors are the id of the last item a caller received. They are opaque to
//! clients: the only valid cursor is one handed out in a previous page.

use serde::Serialize;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Smallest accepted page size.
pub const MIN_PAGE_LIMIT: i64 = 1;

/// Largest accepted page size.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// One page of results plus the cursor for the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Id of the last item when more items follow, otherwise `None`.
    pub next_cursor: Option<String>,
}

/// Resolve an optional page size, rejecting values outside
/// [`MIN_PAGE_LIMIT`]..=[`MAX_PAGE_LIMIT`].
///
/// Unlike a clamp, out-of-range values are an error so callers learn about
/// the bound instead of silently getting a different page size.
pub fn resolve_limit(limit: Option<i64>) -> Result<usize, String> {
    let limit = limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    if !(MIN_PAGE_LIMIT..=MAX_PAGE_LIMIT).contains(&limit) {
        return Err(format!(
            "Limit must be between {MIN_PAGE_LIMIT} and {MAX_PAGE_LIMIT}"
        ));
    }
    usize::try_from(limit).map_err(|_| format!("Invalid limit {limit}"))
}

/// Slice `items` into the page that follows `cursor`.
///
/// `items` must already be in presentation order. A cursor that matches no
/// item restarts from the beginning rather than failing, so stale cursors
/// degrade gracefully.
pub fn paginate_after<T, F>(items: Vec<T>, cursor: Option<&str>, limit: usize, id_of: F) -> Page<T>
where
    F: Fn(&T) -> &str,
{
    let start = cursor
        .and_then(|c| items.iter().position(|item| id_of(item) == c))
        .map_or(0, |idx| idx + 1);

    let mut remaining: Vec<T> = items.into_iter().skip(start).collect();
    let has_more = remaining.len() > limit;
    remaining.truncate(limit);

    let next_cursor = if has_more {
        remaining.last().map(|item| id_of(item).to_string())
    } else {
        None
    };

    Page {
        items: remaining,
        next_cursor,
    }
}
