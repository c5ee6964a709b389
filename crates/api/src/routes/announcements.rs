use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{announcements, comments, reactions};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/announcements", get(announcements::list_announcements))
        .route("/announcements/{id}", get(announcements::get_announcement))
        .route(
            "/announcements/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/announcements/{id}/reactions",
            post(reactions::create_reaction).delete(reactions::delete_reaction),
        )
}
