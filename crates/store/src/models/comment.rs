//! Comment model.

use board_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// A comment on an announcement. Append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: EntityId,
    pub announcement_id: EntityId,
    pub author_name: String,
    pub text: String,
    pub created_at: Timestamp,
}

/// DTO for creating a comment (`POST /announcements/{id}/comments`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub author_name: String,
    pub text: String,
}

/// Fully validated input handed to the store; id and timestamp are
/// assigned on insert.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub announcement_id: EntityId,
    pub author_name: String,
    pub text: String,
}
