//! Handlers for setting and clearing a user's reaction.
//!
//! The caller is identified by `X-User-Id`. Creation honours an optional
//! `Idempotency-Key` header so retried requests replay the first outcome.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use board_core::reactions::ReactionType;
use board_store::models::reaction::CreateReaction;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::user::{IdempotencyKey, UserId};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReactionResponse {
    #[serde(rename = "type")]
    pub reaction_type: ReactionType,
}

/// POST /announcements/{id}/reactions
pub async fn create_reaction(
    State(state): State<AppState>,
    Path(announcement_id): Path<String>,
    UserId(user_id): UserId,
    key: IdempotencyKey,
    payload: Result<Json<CreateReaction>, JsonRejection>,
) -> AppResult<Json<ReactionResponse>> {
    let Json(input) = payload?;
    let reaction_type: ReactionType = input.reaction_type.parse()?;

    let reaction_type = state
        .reactions
        .create(&announcement_id, &user_id, reaction_type, key.as_deref())
        .await?;

    Ok(Json(ReactionResponse { reaction_type }))
}

/// DELETE /announcements/{id}/reactions
pub async fn delete_reaction(
    State(state): State<AppState>,
    Path(announcement_id): Path<String>,
    UserId(user_id): UserId,
) -> AppResult<StatusCode> {
    state.reactions.remove(&announcement_id, &user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
