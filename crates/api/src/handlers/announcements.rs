//! Handlers for the announcement list and detail views.
//!
//! The list carries a strong `ETag` over its serialized summaries so clients
//! can poll with `If-None-Match` and receive `304 Not Modified` when nothing
//! changed.

use axum::extract::{Path, State};
use axum::http::header::{ETAG, IF_NONE_MATCH};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use board_core::fingerprint::{compute_fingerprint, if_none_match};
use board_core::summary::AnnouncementSummary;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /announcements
pub async fn list_announcements(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let summaries = state.summaries.list_summaries().await;
    let etag = compute_fingerprint(&summaries)?;
    let etag_header = HeaderValue::from_str(etag.as_str())
        .map_err(|e| AppError::InternalError(format!("Unencodable ETag: {e}")))?;

    let not_modified = headers
        .get(IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|presented| if_none_match(presented, &etag));

    if not_modified {
        tracing::debug!(%etag, "Announcement list not modified");
        return Ok((StatusCode::NOT_MODIFIED, [(ETAG, etag_header)]).into_response());
    }

    Ok(([(ETAG, etag_header)], Json(summaries)).into_response())
}

/// GET /announcements/{id}
pub async fn get_announcement(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AnnouncementSummary>> {
    let summary = state.summaries.get_summary(&id).await?;
    Ok(Json(summary))
}
