//! Repository trait for comment data access.

use async_trait::async_trait;

use crate::domain::entities::{Comment, NewComment};
use crate::error::AppError;

/// Repository interface for reader comments.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCommentRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Stores a new comment. Comments start out active.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on database errors, including a
    /// missing post (foreign key violation).
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError>;

    /// Active comments for a post, oldest first.
    async fn list_active_for_post(&self, post_id: i64) -> Result<Vec<Comment>, AppError>;

    /// Lists comments across all posts, newest first. Admin use.
    ///
    /// `active` filters by moderation state; `None` lists everything.
    async fn list(&self, active: Option<bool>, limit: i64) -> Result<Vec<Comment>, AppError>;

    /// Sets the moderation flag on a comment.
    ///
    /// Returns `false` if the comment does not exist.
    async fn set_active(&self, id: i64, active: bool) -> Result<bool, AppError>;
}
