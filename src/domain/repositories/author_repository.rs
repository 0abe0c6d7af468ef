//! Repository trait for author data access.

use async_trait::async_trait;

use crate::domain::entities::{Author, NewAuthor};
use crate::error::AppError;

/// Repository interface for post authors. Admin use only.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAuthorRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Creates a new author.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the username is already taken.
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError>;

    /// Finds an author by username.
    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, AppError>;

    /// Lists all authors, oldest first.
    async fn list(&self) -> Result<Vec<Author>, AppError>;
}
