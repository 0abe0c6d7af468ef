//! PostgreSQL implementation of the author repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{Author, NewAuthor};
use crate::domain::repositories::AuthorRepository;
use crate::error::{AppError, map_unique_violation};

const AUTHOR_COLUMNS: &str = "id, username, email, created_at";

/// PostgreSQL repository for authors.
pub struct PgAuthorRepository {
    pool: Arc<PgPool>,
}

impl PgAuthorRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn create(&self, new_author: NewAuthor) -> Result<Author, AppError> {
        let sql = format!(
            "INSERT INTO authors (username, email) \
             VALUES ($1, $2) \
             RETURNING {AUTHOR_COLUMNS}"
        );

        let author = sqlx::query_as::<_, Author>(&sql)
            .bind(&new_author.username)
            .bind(&new_author.email)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| map_unique_violation(e, "This username is already taken"))?;

        Ok(author)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Author>, AppError> {
        let sql = format!("SELECT {AUTHOR_COLUMNS} FROM authors WHERE username = $1");

        let author = sqlx::query_as::<_, Author>(&sql)
            .bind(username)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(author)
    }

    async fn list(&self) -> Result<Vec<Author>, AppError> {
        let sql = format!("SELECT {AUTHOR_COLUMNS} FROM authors ORDER BY created_at");

        let authors = sqlx::query_as::<_, Author>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(authors)
    }
}
