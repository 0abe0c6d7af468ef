//! Comment submission and listing service.

use std::sync::Arc;

use crate::domain::entities::{Comment, NewComment, Post};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

/// Service for reader comments on published posts.
pub struct CommentService<C: CommentRepository> {
    comments: Arc<C>,
}

impl<C: CommentRepository> CommentService<C> {
    /// Creates a new comment service.
    pub fn new(comments: Arc<C>) -> Self {
        Self { comments }
    }

    /// Attaches a comment to a post. New comments are immediately visible;
    /// moderation happens after the fact via the admin CLI.
    ///
    /// The caller is expected to have resolved `post` through a
    /// published-only lookup, so drafts never gain comments.
    pub async fn add(
        &self,
        post: &Post,
        name: String,
        email: String,
        body: String,
    ) -> Result<Comment, AppError> {
        self.comments
            .create(NewComment {
                post_id: post.id,
                name,
                email,
                body,
            })
            .await
    }

    /// Active comments for a post, oldest first.
    pub async fn list_active(&self, post_id: i64) -> Result<Vec<Comment>, AppError> {
        self.comments.list_active_for_post(post_id).await
    }
}
