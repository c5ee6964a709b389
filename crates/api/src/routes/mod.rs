pub mod announcements;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the engagement route tree.
///
/// Route hierarchy:
///
/// ```text
/// /announcements                         list (ETag, If-None-Match)
/// /announcements/{id}                    detail summary
/// /announcements/{id}/comments           list (cursor, limit), create
/// /announcements/{id}/reactions          create (X-User-Id, Idempotency-Key), delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new().merge(announcements::router())
}
