//! Reaction state machine.
//!
//! Per (announcement, user) there are two states, `NoReaction` and
//! `Reacted(kind)`. Creating a reaction moves to `Reacted(kind)` from either
//! state; removing one requires `Reacted(_)`.

use std::sync::Arc;
use std::time::Duration;

use board_core::error::{CoreError, CoreResult};
use board_core::reactions::{validate_user_id, ReactionType};
use board_store::models::reaction::NewReaction;
use board_store::{EntityStore, IdempotencyCache, ReactionChange, DEFAULT_IDEMPOTENCY_TTL};

/// Applies reaction mutations with idempotent replay.
#[derive(Debug, Clone)]
pub struct ReactionEngine {
    store: Arc<EntityStore>,
    idempotency: Arc<IdempotencyCache>,
    ttl: Duration,
}

impl ReactionEngine {
    pub fn new(store: Arc<EntityStore>, idempotency: Arc<IdempotencyCache>) -> Self {
        Self {
            store,
            idempotency,
            ttl: DEFAULT_IDEMPOTENCY_TTL,
        }
    }

    /// Override how long idempotency keys stay replayable.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    async fn ensure_announcement(&self, announcement_id: &str) -> CoreResult<()> {
        if self.store.announcement_exists(announcement_id).await {
            Ok(())
        } else {
            Err(CoreError::not_found("Announcement", announcement_id))
        }
    }

    /// Set the user's reaction and return the resulting kind.
    ///
    /// When `idempotency_key` matches a live record nothing is mutated and
    /// the user's current stored kind is returned, falling back to the kind
    /// the original request produced if the reaction has since been removed.
    /// Repeating an identical request without a key is also a no-op.
    pub async fn create(
        &self,
        announcement_id: &str,
        user_id: &str,
        reaction_type: ReactionType,
        idempotency_key: Option<&str>,
    ) -> CoreResult<ReactionType> {
        self.ensure_announcement(announcement_id).await?;
        validate_user_id(user_id).map_err(CoreError::Validation)?;

        let key = idempotency_key.map(str::trim).filter(|k| !k.is_empty());

        if let Some(key) = key {
            if let Some(record) = self.idempotency.get(key).await {
                let current = self
                    .store
                    .find_reaction(announcement_id, user_id)
                    .await
                    .map_or(record.reaction_type, |r| r.reaction_type);
                tracing::debug!(
                    announcement_id,
                    user_id,
                    key,
                    reaction_type = %current,
                    "Reaction replayed from idempotency key"
                );
                return Ok(current);
            }
        }

        let change = self
            .store
            .replace_reaction(NewReaction {
                announcement_id: announcement_id.to_string(),
                user_id: user_id.to_string(),
                reaction_type,
            })
            .await;

        match &change {
            ReactionChange::Created(r) => {
                tracing::info!(announcement_id, user_id, reaction_type = %r.reaction_type, "Reaction created");
            }
            ReactionChange::Unchanged(_) => {
                tracing::debug!(announcement_id, user_id, %reaction_type, "Reaction unchanged");
            }
            ReactionChange::Replaced { previous, current } => {
                tracing::info!(
                    announcement_id,
                    user_id,
                    from = %previous.reaction_type,
                    to = %current.reaction_type,
                    "Reaction replaced"
                );
            }
        }

        let reaction = change.into_current();

        if let Some(key) = key {
            self.idempotency
                .set(key, &reaction.id, reaction.reaction_type, self.ttl)
                .await;
        }

        Ok(reaction.reaction_type)
    }

    /// Delete the user's reaction.
    ///
    /// Fails with `NotFound` when the user has no reaction, so a repeated
    /// removal is an error rather than a no-op.
    pub async fn remove(&self, announcement_id: &str, user_id: &str) -> CoreResult<()> {
        self.ensure_announcement(announcement_id).await?;
        validate_user_id(user_id).map_err(CoreError::Validation)?;

        if !self.store.delete_reaction(announcement_id, user_id).await {
            return Err(CoreError::not_found(
                "Reaction",
                format!("{announcement_id}:{user_id}"),
            ));
        }

        tracing::info!(announcement_id, user_id, "Reaction removed");
        Ok(())
    }
}
