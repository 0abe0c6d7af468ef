//! PostgreSQL implementation of the tag repository.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::Tag;
use crate::domain::repositories::TagRepository;
use crate::error::AppError;

/// PostgreSQL repository for tags and post-tag links.
pub struct PgTagRepository {
    pool: Arc<PgPool>,
}

impl PgTagRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Tag>, AppError> {
        let tag = sqlx::query_as::<_, Tag>("SELECT id, name, slug FROM tags WHERE slug = $1")
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(tag)
    }

    async fn get_or_create(&self, name: &str) -> Result<Tag, AppError> {
        // The no-op DO UPDATE makes the conflicting row visible to RETURNING.
        let tag = sqlx::query_as::<_, Tag>(
            r#"
            INSERT INTO tags (name, slug)
            VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name, slug
            "#,
        )
        .bind(name)
        .bind(slug::slugify(name))
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(tag)
    }

    async fn replace_for_post(&self, post_id: i64, tag_ids: &[i64]) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

        for tag_id in tag_ids {
            sqlx::query(
                "INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2) \
                 ON CONFLICT DO NOTHING",
            )
            .bind(post_id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(())
    }
}
