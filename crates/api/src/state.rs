use std::sync::Arc;
use std::time::Instant;

use board_engagement::{AggregationService, CommentPager, ReactionEngine};
use board_store::{EntityStore, IdempotencyCache};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory announcements, comments and reactions. Handlers go through
    /// the services below; this handle is for seeding and test setup.
    pub store: Arc<EntityStore>,
    /// Idempotency keys for reaction writes. Shared with the reaction engine;
    /// exposed so tests can observe expiry and eviction.
    pub idempotency: Arc<IdempotencyCache>,
    pub reactions: ReactionEngine,
    pub comments: CommentPager,
    pub summaries: AggregationService,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Process start, reported as uptime by `/health`.
    pub started_at: Instant,
}

impl AppState {
    /// Wire the engagement services over a shared store and cache.
    pub fn new(
        store: Arc<EntityStore>,
        idempotency: Arc<IdempotencyCache>,
        config: ServerConfig,
    ) -> Self {
        let reactions = ReactionEngine::new(Arc::clone(&store), Arc::clone(&idempotency))
            .with_ttl(config.idempotency_ttl());

        Self {
            comments: CommentPager::new(Arc::clone(&store)),
            summaries: AggregationService::new(Arc::clone(&store)),
            reactions,
            store,
            idempotency,
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}
