//! In-memory entity store for the engagement board.
//!
//! - [`EntityStore`] owns announcements, comments and reactions behind a
//!   single lock. It enforces no business rules; that is the engagement
//!   layer's job.
//! - [`IdempotencyCache`] remembers which reaction a client-supplied key
//!   produced, with read-time expiry and an explicit [`IdempotencyCache::sweep`].
//! - [`seed`] installs the bootstrap announcements.

pub mod entity_store;
pub mod idempotency;
pub mod models;
pub mod seed;

pub use entity_store::{AnnouncementSnapshot, EntityStore, ReactionChange};
pub use idempotency::{IdempotencyCache, DEFAULT_IDEMPOTENCY_TTL};
