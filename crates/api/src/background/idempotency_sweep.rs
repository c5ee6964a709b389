//! Periodic removal of expired idempotency keys.
//!
//! Lookups already ignore expired keys; this job only keeps the cache from
//! growing without bound. Runs on a fixed interval using
//! `tokio::time::interval`.

use std::sync::Arc;
use std::time::Duration;

use board_store::IdempotencyCache;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Run the sweep loop until `cancel` is triggered.
///
/// `interval` must be non-zero.
pub async fn run(cache: Arc<IdempotencyCache>, interval: Duration, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = interval.as_secs(),
        "Idempotency sweep started"
    );

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Idempotency sweep stopping");
                break;
            }
            _ = ticker.tick() => {
                let removed = cache.sweep().await;
                if removed > 0 {
                    let remaining = cache.len().await;
                    tracing::info!(removed, remaining, "Idempotency sweep: evicted expired keys");
                } else {
                    tracing::debug!("Idempotency sweep: nothing to evict");
                }
            }
        }
    }
}
