//! Idempotency-key cache for reaction mutations.
//!
//! Expiry is checked on every read, so correctness never depends on the
//! sweep. [`IdempotencyCache::sweep`] only bounds memory; it is driven by a
//! background task owned by the server.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use board_core::clock::{SharedClock, SystemClock};
use board_core::reactions::ReactionType;
use board_core::types::Timestamp;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::models::idempotency::IdempotencyRecord;

/// How long a key stays replayable: 5 minutes.
pub const DEFAULT_IDEMPOTENCY_TTL: Duration = Duration::from_secs(300);

/// Maps client-supplied keys to the reaction their first request produced.
///
/// Keys are opaque and global: the same key sent for a different
/// announcement or user still replays the first outcome.
#[derive(Debug)]
pub struct IdempotencyCache {
    entries: RwLock<HashMap<String, IdempotencyRecord>>,
    clock: SharedClock,
}

impl IdempotencyCache {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            clock,
        }
    }

    /// Look up a live record, evicting it if it has expired.
    pub async fn get(&self, key: &str) -> Option<IdempotencyRecord> {
        let now = self.clock.now();
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return None,
                Some(record) if !record.is_expired(now) => return Some(record.clone()),
                Some(_) => {}
            }
        }

        // Expired: re-check under the write guard, a concurrent `set` may
        // have refreshed the key in between.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|r| r.is_expired(now)) {
            entries.remove(key);
            tracing::debug!(key, "Idempotency key expired on read");
        }
        None
    }

    /// Remember `key` as having produced `reaction_id`, live for `ttl`.
    pub async fn set(
        &self,
        key: &str,
        reaction_id: &str,
        reaction_type: ReactionType,
        ttl: Duration,
    ) -> IdempotencyRecord {
        let record = IdempotencyRecord {
            key: key.to_string(),
            reaction_id: reaction_id.to_string(),
            reaction_type,
            expires_at: expiry_after(self.clock.now(), ttl),
        };
        self.entries
            .write()
            .await
            .insert(record.key.clone(), record.clone());
        record
    }

    /// Remove every expired entry, returning how many were dropped.
    ///
    /// Expired keys are collected under a read guard first so the write
    /// guard is only held for the removals themselves.
    pub async fn sweep(&self) -> usize {
        let now = self.clock.now();
        let expired: Vec<String> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|(_, record)| record.is_expired(now))
            .map(|(key, _)| key.clone())
            .collect();

        if expired.is_empty() {
            return 0;
        }

        let mut entries = self.entries.write().await;
        let mut removed = 0;
        for key in expired {
            if entries.get(&key).is_some_and(|r| r.is_expired(now)) {
                entries.remove(&key);
                removed += 1;
            }
        }
        removed
    }

    /// Number of stored entries, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Default for IdempotencyCache {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

/// `now + ttl`, saturating at the latest representable instant.
fn expiry_after(now: Timestamp, ttl: Duration) -> Timestamp {
    chrono::Duration::from_std(ttl)
        .ok()
        .and_then(|delta| now.checked_add_signed(delta))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::clock::{Clock, ManualClock};

    fn cache() -> (IdempotencyCache, ManualClock) {
        let clock = ManualClock::default();
        (IdempotencyCache::new(Arc::new(clock.clone())), clock)
    }

    #[tokio::test]
    async fn record_is_retrievable_immediately_after_set() {
        let (cache, clock) = cache();
        let stored = cache
            .set("k1", "r1", ReactionType::Up, DEFAULT_IDEMPOTENCY_TTL)
            .await;
        assert_eq!(stored.expires_at, clock.now() + chrono::Duration::minutes(5));

        let found = cache.get("k1").await.unwrap();
        assert_eq!(found.reaction_id, "r1");
        assert_eq!(found.reaction_type, ReactionType::Up);
    }

    #[tokio::test]
    async fn record_is_live_exactly_at_expiry() {
        let (cache, clock) = cache();
        cache.set("k1", "r1", ReactionType::Up, DEFAULT_IDEMPOTENCY_TTL).await;

        clock.advance(chrono::Duration::minutes(5));
        assert!(cache.get("k1").await.is_some());
    }

    #[tokio::test]
    async fn expired_record_is_evicted_on_read() {
        let (cache, clock) = cache();
        cache.set("k1", "r1", ReactionType::Up, DEFAULT_IDEMPOTENCY_TTL).await;

        clock.advance(chrono::Duration::minutes(5) + chrono::Duration::seconds(1));
        assert!(cache.get("k1").await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn unknown_key_is_none() {
        let (cache, _) = cache();
        assert!(cache.get("missing").await.is_none());
    }

    #[tokio::test]
    async fn set_overwrites_and_refreshes_expiry() {
        let (cache, clock) = cache();
        cache.set("k1", "r1", ReactionType::Up, DEFAULT_IDEMPOTENCY_TTL).await;
        clock.advance(chrono::Duration::minutes(4));
        cache.set("k1", "r2", ReactionType::Down, DEFAULT_IDEMPOTENCY_TTL).await;
        clock.advance(chrono::Duration::minutes(4));

        let found = cache.get("k1").await.unwrap();
        assert_eq!(found.reaction_id, "r2");
    }

    #[tokio::test]
    async fn sweep_removes_only_expired_entries() {
        let (cache, clock) = cache();
        cache.set("old", "r1", ReactionType::Up, Duration::from_secs(60)).await;
        cache.set("fresh", "r2", ReactionType::Heart, DEFAULT_IDEMPOTENCY_TTL).await;

        clock.advance(chrono::Duration::seconds(61));
        assert_eq!(cache.sweep().await, 1);
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("fresh").await.is_some());

        assert_eq!(cache.sweep().await, 0);
    }

    #[test]
    fn huge_ttl_saturates_instead_of_overflowing() {
        let expiry = expiry_after(Utc::now(), Duration::from_secs(u64::MAX));
        assert_eq!(expiry, DateTime::<Utc>::MAX_UTC);
    }
}
