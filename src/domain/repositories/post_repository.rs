//! Repository trait for post data access.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{CommentedPost, NewPost, Post, PostStatus};
use crate::error::AppError;

/// Repository interface for blog posts.
///
/// Public read methods only ever return published posts; draft access is
/// restricted to the admin-facing methods ([`Self::list`],
/// [`Self::find_by_slug`], [`Self::publish`]).
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPostRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Creates a new post.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug is already taken on the
    /// publish date. Returns [`AppError::Database`] on other database errors.
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError>;

    /// Finds a published post by its publish date and slug.
    ///
    /// The date compares against the UTC calendar date of `publish`, so a
    /// post published late in the evening is still found under that day.
    async fn find_published_by_date_slug(
        &self,
        date: NaiveDate,
        slug: &str,
    ) -> Result<Option<Post>, AppError>;

    /// Finds a published post by id.
    async fn find_published_by_id(&self, id: i64) -> Result<Option<Post>, AppError>;

    /// Lists published posts, newest first, optionally filtered by tag slug.
    async fn list_published(
        &self,
        tag_slug: Option<String>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, AppError>;

    /// Counts published posts, optionally filtered by tag slug.
    async fn count_published(&self, tag_slug: Option<String>) -> Result<i64, AppError>;

    /// Published posts sharing at least one tag with `post_id`.
    ///
    /// Excludes the post itself. Ordered by number of shared tags, then by
    /// publish date, both descending.
    async fn similar_to(&self, post_id: i64, limit: i64) -> Result<Vec<Post>, AppError>;

    /// Published posts whose title is trigram-similar to `query`.
    ///
    /// Keeps matches with `similarity(title, query) > 0.1`, ordered by
    /// similarity descending. Requires the `pg_trgm` extension.
    async fn search_trigram(&self, query: &str, limit: i64) -> Result<Vec<Post>, AppError>;

    /// Published posts matching `query` against a weighted search vector.
    ///
    /// Title matches weigh `A`, body matches weigh `B`; results are ordered
    /// by `ts_rank` descending.
    async fn search_fulltext(&self, query: &str, limit: i64) -> Result<Vec<Post>, AppError>;

    /// Most recently published posts.
    async fn latest(&self, limit: i64) -> Result<Vec<Post>, AppError>;

    /// Published posts with the highest comment counts.
    async fn most_commented(&self, limit: i64) -> Result<Vec<CommentedPost>, AppError>;

    /// Lists posts of any status, newest first. Admin use.
    async fn list(&self, status: Option<PostStatus>, limit: i64) -> Result<Vec<Post>, AppError>;

    /// Finds a post of any status by slug. Admin use.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError>;

    /// Marks the post with `slug` as published.
    ///
    /// Returns the updated post, or `None` if no post has that slug.
    async fn publish(&self, slug: &str) -> Result<Option<Post>, AppError>;
}
