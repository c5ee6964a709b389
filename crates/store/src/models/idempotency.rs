//! Idempotency record model.

use board_core::reactions::ReactionType;
use board_core::types::{EntityId, Timestamp};

/// The remembered outcome of a keyed reaction request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdempotencyRecord {
    pub key: String,
    pub reaction_id: EntityId,
    /// Kind the original request produced.
    pub reaction_type: ReactionType,
    pub expires_at: Timestamp,
}

impl IdempotencyRecord {
    /// A record is live up to and including `expires_at`.
    pub fn is_expired(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }
}
