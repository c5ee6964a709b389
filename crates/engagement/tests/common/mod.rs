#![allow(dead_code)]

use std::sync::Arc;

use board_core::clock::ManualClock;
use board_engagement::{AggregationService, CommentPager, ReactionEngine};
use board_store::models::announcement::NewAnnouncement;
use board_store::models::comment::CreateComment;
use board_store::{EntityStore, IdempotencyCache};

/// Announcement id present in every fixture.
pub const ANNOUNCEMENT: &str = "a1";

/// Services wired to one shared store and a manual clock.
pub struct Fixture {
    pub clock: ManualClock,
    pub store: Arc<EntityStore>,
    pub idempotency: Arc<IdempotencyCache>,
    pub reactions: ReactionEngine,
    pub comments: CommentPager,
    pub summaries: AggregationService,
}

pub async fn fixture() -> Fixture {
    let clock = ManualClock::default();
    let store = Arc::new(EntityStore::new(Arc::new(clock.clone())));
    let idempotency = Arc::new(IdempotencyCache::new(Arc::new(clock.clone())));

    store
        .insert_announcement(NewAnnouncement {
            id: Some(ANNOUNCEMENT.to_string()),
            title: "Welcome".to_string(),
            content: "Hello everyone".to_string(),
            author_id: "admin".to_string(),
        })
        .await;

    Fixture {
        reactions: ReactionEngine::new(Arc::clone(&store), Arc::clone(&idempotency)),
        comments: CommentPager::new(Arc::clone(&store)),
        summaries: AggregationService::new(Arc::clone(&store)),
        clock,
        store,
        idempotency,
    }
}

pub fn comment(text: &str) -> CreateComment {
    CreateComment {
        author_name: "Ann".to_string(),
        text: text.to_string(),
    }
}
