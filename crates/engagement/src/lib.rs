//! Engagement services: the business rules on top of the entity store.
//!
//! - [`ReactionEngine`] keeps one reaction per (announcement, user) and
//!   replays keyed requests from the idempotency cache.
//! - [`CommentPager`] validates new comments and serves them through
//!   forward cursors.
//! - [`AggregationService`] projects announcements into summaries with
//!   comment counts, reaction tallies and last activity.

pub mod comments;
pub mod reactions;
pub mod summaries;

pub use comments::{CommentPage, CommentPager};
pub use reactions::ReactionEngine;
pub use summaries::{summarize, AggregationService};
