use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use board_store::models::comment::{Comment, CreateComment};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::CursorParams;
use crate::state::AppState;

/// One page of comments plus the cursor for the next one.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListResponse {
    pub comments: Vec<Comment>,
    pub next_cursor: Option<String>,
}

/// POST /announcements/{id}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    Path(announcement_id): Path<String>,
    payload: Result<Json<CreateComment>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload?;
    let comment = state.comments.create(&announcement_id, input).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// GET /announcements/{id}/comments?cursor=&limit=
pub async fn list_comments(
    State(state): State<AppState>,
    Path(announcement_id): Path<String>,
    params: Result<Query<CursorParams>, QueryRejection>,
) -> AppResult<Json<CommentListResponse>> {
    let Query(params) = params?;
    let limit = params.limit().map_err(AppError::BadRequest)?;

    let page = state
        .comments
        .list(&announcement_id, params.cursor(), limit)
        .await?;

    Ok(Json(CommentListResponse {
        comments: page.items,
        next_cursor: page.next_cursor,
    }))
}
