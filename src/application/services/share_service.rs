//! Share-by-email service.

use std::sync::Arc;

use url::Url;

use crate::domain::entities::Post;
use crate::domain::repositories::PostRepository;
use crate::error::AppError;
use crate::infrastructure::mail::{Mailer, OutgoingEmail};

/// A validated share request from the share form.
#[derive(Debug, Clone)]
pub struct ShareRequest {
    /// Name of the person recommending the post.
    pub name: String,
    /// Recipient address.
    pub to: String,
    /// Optional personal note.
    pub comments: String,
}

/// Service that emails post recommendations to a friend.
pub struct ShareService<P: PostRepository> {
    posts: Arc<P>,
    mailer: Arc<dyn Mailer>,
    base_url: Url,
}

impl<P: PostRepository> ShareService<P> {
    /// Creates a new share service.
    pub fn new(posts: Arc<P>, mailer: Arc<dyn Mailer>, base_url: Url) -> Self {
        Self {
            posts,
            mailer,
            base_url,
        }
    }

    /// Sends a recommendation email for a published post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the post is missing or a draft,
    /// [`AppError::Mail`] if delivery fails.
    pub async fn share(&self, post_id: i64, request: ShareRequest) -> Result<(), AppError> {
        let post = self
            .posts
            .find_published_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::not_found("Post not found"))?;

        let email = self.compose(&post, &request)?;
        self.mailer.send(email).await
    }

    /// Builds the recommendation email for `post`.
    fn compose(&self, post: &Post, request: &ShareRequest) -> Result<OutgoingEmail, AppError> {
        let post_url = self
            .base_url
            .join(&post.url_path())
            .map_err(|e| AppError::Mail(format!("could not build post URL: {e}")))?;

        let subject = format!("{} recommends you read: {}", request.name, post.title);
        let body = format!(
            "Read {} at {}\n\n{}'s comments: {}",
            post.title, post_url, request.name, request.comments
        );

        Ok(OutgoingEmail {
            to: request.to.clone(),
            subject,
            body,
        })
    }
}
