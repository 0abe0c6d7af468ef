//! Repository trait for tag data access.

use async_trait::async_trait;

use crate::domain::entities::Tag;
use crate::error::AppError;

/// Repository interface for tags.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTagRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// Finds a tag by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, AppError>;

    /// Finds a tag by name, creating it (with a slugified name) if missing.
    async fn get_or_create(&self, name: &str) -> Result<Tag, AppError>;

    /// Replaces the tag set of a post with `tag_ids`.
    async fn replace_for_post(&self, post_id: i64, tag_ids: &[i64]) -> Result<(), AppError>;
}
