//! Announcement model.

use board_core::types::{EntityId, Timestamp};
use serde::Serialize;

/// A published announcement. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub author_id: String,
}

/// Input for inserting an announcement at bootstrap.
#[derive(Debug, Clone)]
pub struct NewAnnouncement {
    /// Fixed id for seed data; a UUID is generated when `None`.
    pub id: Option<EntityId>,
    pub title: String,
    pub content: String,
    pub author_id: String,
}
