use serde::{Deserialize, Serialize};

use crate::reactions::ReactionTally;
use crate::types::{EntityId, Timestamp};

/// Read-side projection of an announcement with its engagement counters.
///
/// Field order is part of the list fingerprint: the ETag hashes the JSON
/// serialization of this struct, so reordering fields changes every ETag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnouncementSummary {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub comment_count: usize,
    pub reactions: ReactionTally,
    /// Creation time of the newest comment, or `created_at` when there are none.
    pub last_activity_at: Timestamp,
    pub created_at: Timestamp,
}
