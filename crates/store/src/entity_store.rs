//! The in-memory entity store.
//!
//! All collections sit behind one [`RwLock`], which makes every mutation
//! atomic with respect to every other and lets a reader clone out a
//! consistent view of an announcement with its comments and reactions.
//! Values are cloned out; nothing outside the store holds a reference into
//! the collections.

use std::collections::HashMap;
use std::sync::Arc;

use board_core::clock::{SharedClock, SystemClock};
use board_core::types::EntityId;
use tokio::sync::RwLock;

use crate::models::announcement::{Announcement, NewAnnouncement};
use crate::models::comment::{Comment, NewComment};
use crate::models::reaction::{NewReaction, Reaction};

#[derive(Debug, Default)]
struct Collections {
    /// Insertion order is the listing order.
    announcements: Vec<Announcement>,
    /// Comments per announcement, in insertion order.
    comments: HashMap<EntityId, Vec<Comment>>,
    /// Reactions per announcement, in insertion order.
    reactions: HashMap<EntityId, Vec<Reaction>>,
}

impl Collections {
    fn announcement(&self, id: &str) -> Option<&Announcement> {
        self.announcements.iter().find(|a| a.id == id)
    }

    /// Comments ordered by `created_at`; the sort is stable, so equal
    /// timestamps keep insertion order.
    fn sorted_comments(&self, announcement_id: &str) -> Vec<Comment> {
        let mut comments = self
            .comments
            .get(announcement_id)
            .cloned()
            .unwrap_or_default();
        comments.sort_by_key(|c| c.created_at);
        comments
    }

    fn reactions(&self, announcement_id: &str) -> Vec<Reaction> {
        self.reactions
            .get(announcement_id)
            .cloned()
            .unwrap_or_default()
    }

    fn snapshot(&self, announcement: &Announcement) -> AnnouncementSnapshot {
        AnnouncementSnapshot {
            announcement: announcement.clone(),
            comments: self.sorted_comments(&announcement.id),
            reactions: self.reactions(&announcement.id),
        }
    }
}

/// An announcement together with its comments and reactions, read under a
/// single lock acquisition.
#[derive(Debug, Clone)]
pub struct AnnouncementSnapshot {
    pub announcement: Announcement,
    /// Ascending by creation time.
    pub comments: Vec<Comment>,
    pub reactions: Vec<Reaction>,
}

/// Outcome of [`EntityStore::replace_reaction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReactionChange {
    /// The user had no reaction; one was inserted.
    Created(Reaction),
    /// The user already had a reaction of the requested kind.
    Unchanged(Reaction),
    /// The user's previous reaction was removed and a new one inserted.
    Replaced { previous: Reaction, current: Reaction },
}

impl ReactionChange {
    /// The reaction that exists after the change.
    pub fn current(&self) -> &Reaction {
        match self {
            Self::Created(current)
            | Self::Unchanged(current)
            | Self::Replaced { current, .. } => current,
        }
    }

    pub fn into_current(self) -> Reaction {
        match self {
            Self::Created(current)
            | Self::Unchanged(current)
            | Self::Replaced { current, .. } => current,
        }
    }
}

/// Owns every announcement, comment and reaction for the process lifetime.
///
/// Cheap to share behind an `Arc`. Lookups by an unknown announcement id
/// return empty results; existence checks belong to the caller.
#[derive(Debug)]
pub struct EntityStore {
    collections: RwLock<Collections>,
    clock: SharedClock,
}

impl EntityStore {
    /// Create an empty store that stamps rows with `clock`.
    pub fn new(clock: SharedClock) -> Self {
        Self {
            collections: RwLock::new(Collections::default()),
            clock,
        }
    }

    fn new_id() -> EntityId {
        uuid::Uuid::new_v4().to_string()
    }

    fn build_reaction(&self, input: NewReaction) -> Reaction {
        Reaction {
            id: Self::new_id(),
            announcement_id: input.announcement_id,
            user_id: input.user_id,
            reaction_type: input.reaction_type,
            created_at: self.clock.now(),
        }
    }

    // -----------------------------------------------------------------------
    // Announcements
    // -----------------------------------------------------------------------

    /// Insert an announcement. Only used at bootstrap; there is no edit path.
    pub async fn insert_announcement(&self, input: NewAnnouncement) -> Announcement {
        let mut collections = self.collections.write().await;
        let now = self.clock.now();
        let announcement = Announcement {
            id: input.id.unwrap_or_else(Self::new_id),
            title: input.title,
            content: input.content,
            created_at: now,
            updated_at: now,
            author_id: input.author_id,
        };
        collections.announcements.push(announcement.clone());
        announcement
    }

    pub async fn list_announcements(&self) -> Vec<Announcement> {
        self.collections.read().await.announcements.clone()
    }

    pub async fn get_announcement(&self, id: &str) -> Option<Announcement> {
        self.collections.read().await.announcement(id).cloned()
    }

    pub async fn announcement_exists(&self, id: &str) -> bool {
        self.collections.read().await.announcement(id).is_some()
    }

    // -----------------------------------------------------------------------
    // Comments
    // -----------------------------------------------------------------------

    /// Append a comment, assigning its id and creation time.
    ///
    /// The timestamp is taken while the write lock is held, so creation
    /// order and insertion order agree.
    pub async fn add_comment(&self, input: NewComment) -> Comment {
        let mut collections = self.collections.write().await;
        let comment = Comment {
            id: Self::new_id(),
            announcement_id: input.announcement_id,
            author_name: input.author_name,
            text: input.text,
            created_at: self.clock.now(),
        };
        collections
            .comments
            .entry(comment.announcement_id.clone())
            .or_default()
            .push(comment.clone());
        comment
    }

    /// Comments for an announcement, oldest first.
    pub async fn list_comments(&self, announcement_id: &str) -> Vec<Comment> {
        self.collections.read().await.sorted_comments(announcement_id)
    }

    pub async fn count_comments(&self, announcement_id: &str) -> usize {
        self.collections
            .read()
            .await
            .comments
            .get(announcement_id)
            .map_or(0, Vec::len)
    }

    // -----------------------------------------------------------------------
    // Reactions
    // -----------------------------------------------------------------------

    pub async fn list_reactions(&self, announcement_id: &str) -> Vec<Reaction> {
        self.collections.read().await.reactions(announcement_id)
    }

    pub async fn find_reaction(&self, announcement_id: &str, user_id: &str) -> Option<Reaction> {
        self.collections
            .read()
            .await
            .reactions
            .get(announcement_id)
            .and_then(|rows| rows.iter().find(|r| r.user_id == user_id))
            .cloned()
    }

    /// Append a reaction unconditionally.
    ///
    /// Does not check for an existing reaction by the same user; use
    /// [`EntityStore::replace_reaction`] to keep one reaction per user.
    pub async fn add_reaction(&self, input: NewReaction) -> Reaction {
        let mut collections = self.collections.write().await;
        let reaction = self.build_reaction(input);
        collections
            .reactions
            .entry(reaction.announcement_id.clone())
            .or_default()
            .push(reaction.clone());
        reaction
    }

    /// Set the user's reaction to `input.reaction_type` in one atomic step.
    ///
    /// An existing reaction of another kind is deleted and the new one
    /// inserted under the same write guard, so no reader ever sees the user
    /// with zero reactions mid-update.
    pub async fn replace_reaction(&self, input: NewReaction) -> ReactionChange {
        let mut collections = self.collections.write().await;
        let rows = collections
            .reactions
            .entry(input.announcement_id.clone())
            .or_default();

        match rows.iter().position(|r| r.user_id == input.user_id) {
            Some(idx) if rows[idx].reaction_type == input.reaction_type => {
                ReactionChange::Unchanged(rows[idx].clone())
            }
            Some(idx) => {
                let previous = rows.remove(idx);
                let current = self.build_reaction(input);
                rows.push(current.clone());
                ReactionChange::Replaced { previous, current }
            }
            None => {
                let current = self.build_reaction(input);
                rows.push(current.clone());
                ReactionChange::Created(current)
            }
        }
    }

    /// Delete the user's reaction. Returns `true` iff a row was removed.
    pub async fn delete_reaction(&self, announcement_id: &str, user_id: &str) -> bool {
        let mut collections = self.collections.write().await;
        let Some(rows) = collections.reactions.get_mut(announcement_id) else {
            return false;
        };
        match rows.iter().position(|r| r.user_id == user_id) {
            Some(idx) => {
                rows.remove(idx);
                true
            }
            None => false,
        }
    }

    // -----------------------------------------------------------------------
    // Snapshots
    // -----------------------------------------------------------------------

    /// One announcement with its comments and reactions, read atomically.
    pub async fn snapshot(&self, announcement_id: &str) -> Option<AnnouncementSnapshot> {
        let collections = self.collections.read().await;
        collections
            .announcement(announcement_id)
            .map(|a| collections.snapshot(a))
    }

    /// Every announcement with its comments and reactions, read atomically.
    pub async fn snapshots(&self) -> Vec<AnnouncementSnapshot> {
        let collections = self.collections.read().await;
        collections
            .announcements
            .iter()
            .map(|a| collections.snapshot(a))
            .collect()
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
