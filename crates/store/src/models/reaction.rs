//! Reaction model.

use board_core::reactions::ReactionType;
use board_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

/// A single user's reaction to an announcement.
///
/// Reactions are never edited; changing kind replaces the row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reaction {
    pub id: EntityId,
    pub announcement_id: EntityId,
    pub user_id: String,
    #[serde(rename = "type")]
    pub reaction_type: ReactionType,
    pub created_at: Timestamp,
}

/// DTO for `POST /announcements/{id}/reactions`.
///
/// The kind arrives as a raw string so an unknown value surfaces as a
/// validation error rather than a body-parsing failure.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReaction {
    #[serde(rename = "type")]
    pub reaction_type: String,
}

/// Input handed to the store; id and timestamp are assigned on insert.
#[derive(Debug, Clone)]
pub struct NewReaction {
    pub announcement_id: EntityId,
    pub user_id: String,
    pub reaction_type: ReactionType,
}
