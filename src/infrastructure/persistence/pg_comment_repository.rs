//! PostgreSQL implementation of the comment repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{Comment, NewComment};
use crate::domain::repositories::CommentRepository;
use crate::error::AppError;

const COMMENT_COLUMNS: &str = "id, post_id, name, email, body, created, updated, active";

/// PostgreSQL repository for comment storage and moderation.
pub struct PgCommentRepository {
    pool: Arc<PgPool>,
}

impl PgCommentRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(&self, new_comment: NewComment) -> Result<Comment, AppError> {
        let sql = format!(
            "INSERT INTO comments (post_id, name, email, body) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COMMENT_COLUMNS}"
        );

        let comment = sqlx::query_as::<_, Comment>(&sql)
            .bind(new_comment.post_id)
            .bind(&new_comment.name)
            .bind(&new_comment.email)
            .bind(&new_comment.body)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(comment)
    }

    async fn list_active_for_post(&self, post_id: i64) -> Result<Vec<Comment>, AppError> {
        let sql = format!(
            "SELECT {COMMENT_COLUMNS} FROM comments \
             WHERE post_id = $1 AND active \
             ORDER BY created"
        );

        let comments = sqlx::query_as::<_, Comment>(&sql)
            .bind(post_id)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(comments)
    }

    async fn list(&self, active: Option<bool>, limit: i64) -> Result<Vec<Comment>, AppError> {
        let comments = if let Some(active) = active {
            let sql = format!(
                "SELECT {COMMENT_COLUMNS} FROM comments \
                 WHERE active = $1 \
                 ORDER BY created DESC \
                 LIMIT $2"
            );

            sqlx::query_as::<_, Comment>(&sql)
                .bind(active)
                .bind(limit)
                .fetch_all(self.pool.as_ref())
                .await?
        } else {
            let sql = format!(
                "SELECT {COMMENT_COLUMNS} FROM comments ORDER BY created DESC LIMIT $1"
            );

            sqlx::query_as::<_, Comment>(&sql)
                .bind(limit)
                .fetch_all(self.pool.as_ref())
                .await?
        };

        Ok(comments)
    }

    async fn set_active(&self, id: i64, active: bool) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE comments SET active = $2, updated = now() WHERE id = $1",
        )
        .bind(id)
        .bind(active)
        .execute(self.pool.as_ref())
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
