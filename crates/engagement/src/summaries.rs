//! Read-side projection of announcements.
//!
//! Summaries are recomputed from the store on every call; nothing here is
//! cached.

use std::sync::Arc;

use board_core::error::{CoreError, CoreResult};
use board_core::reactions::ReactionTally;
use board_core::summary::AnnouncementSummary;
use board_store::{AnnouncementSnapshot, EntityStore};

/// Project one snapshot into its summary.
pub fn summarize(snapshot: &AnnouncementSnapshot) -> AnnouncementSummary {
    let announcement = &snapshot.announcement;
    let reactions: ReactionTally = snapshot.reactions.iter().map(|r| r.reaction_type).collect();
    let last_activity_at = snapshot
        .comments
        .iter()
        .map(|c| c.created_at)
        .max()
        .unwrap_or(announcement.created_at);

    AnnouncementSummary {
        id: announcement.id.clone(),
        title: announcement.title.clone(),
        content: announcement.content.clone(),
        comment_count: snapshot.comments.len(),
        reactions,
        last_activity_at,
        created_at: announcement.created_at,
    }
}

#[derive(Debug, Clone)]
pub struct AggregationService {
    store: Arc<EntityStore>,
}

impl AggregationService {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    /// Summaries for every announcement, in listing order.
    pub async fn list_summaries(&self) -> Vec<AnnouncementSummary> {
        self.store.snapshots().await.iter().map(summarize).collect()
    }

    pub async fn get_summary(&self, id: &str) -> CoreResult<AnnouncementSummary> {
        self.store
            .snapshot(id)
            .await
            .map(|snapshot| summarize(&snapshot))
            .ok_or_else(|| CoreError::not_found("Announcement", id))
    }
}
