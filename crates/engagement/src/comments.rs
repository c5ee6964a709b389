//! Comment creation and cursor pagination.

use std::sync::Arc;

use board_core::comments::{validate_author_name, validate_comment_text};
use board_core::error::{CoreError, CoreResult};
use board_core::pagination::{paginate_after, resolve_limit, Page};
use board_store::models::comment::{Comment, CreateComment, NewComment};
use board_store::EntityStore;

/// A page of comments, oldest first.
pub type CommentPage = Page<Comment>;

#[derive(Debug, Clone)]
pub struct CommentPager {
    store: Arc<EntityStore>,
}

impl CommentPager {
    pub fn new(store: Arc<EntityStore>) -> Self {
        Self { store }
    }

    async fn ensure_announcement(&self, announcement_id: &str) -> CoreResult<()> {
        if self.store.announcement_exists(announcement_id).await {
            Ok(())
        } else {
            Err(CoreError::not_found("Announcement", announcement_id))
        }
    }

    /// Validate and append a comment to an announcement.
    pub async fn create(&self, announcement_id: &str, input: CreateComment) -> CoreResult<Comment> {
        self.ensure_announcement(announcement_id).await?;
        validate_author_name(&input.author_name).map_err(CoreError::Validation)?;
        validate_comment_text(&input.text).map_err(CoreError::Validation)?;

        let comment = self
            .store
            .add_comment(NewComment {
                announcement_id: announcement_id.to_string(),
                author_name: input.author_name,
                text: input.text,
            })
            .await;

        tracing::info!(announcement_id, comment_id = %comment.id, "Comment created");
        Ok(comment)
    }

    /// Return the page of comments that follows `cursor`.
    ///
    /// `limit` defaults to 10 and must lie in `1..=100`. A cursor that does
    /// not name a comment of this announcement restarts from the first one.
    pub async fn list(
        &self,
        announcement_id: &str,
        cursor: Option<&str>,
        limit: Option<i64>,
    ) -> CoreResult<CommentPage> {
        self.ensure_announcement(announcement_id).await?;
        let limit = resolve_limit(limit).map_err(CoreError::Validation)?;

        let comments = self.store.list_comments(announcement_id).await;
        Ok(paginate_after(comments, cursor, limit, |c| c.id.as_str()))
    }
}
