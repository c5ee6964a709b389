//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Cursor pagination parameters (`?cursor=&limit=`).
///
/// `limit` is kept as text so a non-numeric value surfaces as a 400 with a
/// readable message instead of a generic deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct CursorParams {
    pub cursor: Option<String>,
    pub limit: Option<String>,
}

impl CursorParams {
    /// The cursor, treating an empty `?cursor=` as absent.
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|c| !c.is_empty())
    }

    /// Parse `limit` as an integer. Range checks happen in the pager.
    pub fn limit(&self) -> Result<Option<i64>, String> {
        match self.limit.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| format!("Limit must be an integer, got '{raw}'")),
        }
    }
}
