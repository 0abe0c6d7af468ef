//! PostgreSQL implementation of the post repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::domain::entities::{CommentedPost, NewPost, Post, PostStatus};
use crate::domain::repositories::PostRepository;
use crate::error::{AppError, map_unique_violation};

/// Column list resolving the author username and aggregating tag names, so
/// every query maps straight onto [`Post`].
const POST_COLUMNS: &str = r#"p.id, p.uuid, p.title, p.slug, p.author_id, a.username AS author,
       p.body, p.publish, p.created, p.updated, p.status,
       (SELECT COALESCE(array_agg(t.name ORDER BY t.name), ARRAY[]::text[])
          FROM post_tags pt
          JOIN tags t ON t.id = pt.tag_id
         WHERE pt.post_id = p.id) AS tags"#;

const POST_FROM: &str = "FROM posts p JOIN authors a ON a.id = p.author_id";

/// Weighted search vector: title matches outrank body matches.
const SEARCH_VECTOR: &str = "setweight(to_tsvector('english', p.title), 'A') || \
                             setweight(to_tsvector('english', p.body), 'B')";

/// PostgreSQL repository for post storage and retrieval.
///
/// Queries use the runtime sqlx API with bound parameters. Search relies on
/// the `pg_trgm` extension and the GIN indexes created by the migrations.
pub struct PgPostRepository {
    pool: Arc<PgPool>,
}

impl PgPostRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: i64) -> Result<Post, AppError> {
        let sql = format!("SELECT {POST_COLUMNS} {POST_FROM} WHERE p.id = $1");
        let post = sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(post)
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    async fn create(&self, new_post: NewPost) -> Result<Post, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO posts (title, slug, author_id, body, publish, status)
            VALUES ($1, $2, $3, $4, COALESCE($5, now()), $6)
            RETURNING id
            "#,
        )
        .bind(&new_post.title)
        .bind(&new_post.slug)
        .bind(new_post.author_id)
        .bind(&new_post.body)
        .bind(new_post.publish)
        .bind(new_post.status)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            map_unique_violation(e, "A post with this slug already exists on that publish date")
        })?;

        self.fetch_by_id(id).await
    }

    async fn find_published_by_date_slug(
        &self,
        date: NaiveDate,
        slug: &str,
    ) -> Result<Option<Post>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} {POST_FROM} \
             WHERE p.status = 'published' \
               AND p.slug = $1 \
               AND (p.publish AT TIME ZONE 'UTC')::date = $2"
        );

        let post = sqlx::query_as::<_, Post>(&sql)
            .bind(slug)
            .bind(date)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(post)
    }

    async fn find_published_by_id(&self, id: i64) -> Result<Option<Post>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} {POST_FROM} WHERE p.status = 'published' AND p.id = $1"
        );

        let post = sqlx::query_as::<_, Post>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(post)
    }

    async fn list_published(
        &self,
        tag_slug: Option<String>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, AppError> {
        let posts = if let Some(tag_slug) = tag_slug {
            let sql = format!(
                "SELECT {POST_COLUMNS} {POST_FROM} \
                 WHERE p.status = 'published' \
                   AND EXISTS (SELECT 1 FROM post_tags pt \
                                 JOIN tags t ON t.id = pt.tag_id \
                                WHERE pt.post_id = p.id AND t.slug = $1) \
                 ORDER BY p.publish DESC \
                 LIMIT $2 OFFSET $3"
            );

            sqlx::query_as::<_, Post>(&sql)
                .bind(tag_slug)
                .bind(limit)
                .bind(offset)
                .fetch_all(self.pool.as_ref())
                .await?
        } else {
            let sql = format!(
                "SELECT {POST_COLUMNS} {POST_FROM} \
                 WHERE p.status = 'published' \
                 ORDER BY p.publish DESC \
                 LIMIT $1 OFFSET $2"
            );

            sqlx::query_as::<_, Post>(&sql)
                .bind(limit)
                .bind(offset)
                .fetch_all(self.pool.as_ref())
                .await?
        };

        Ok(posts)
    }

    async fn count_published(&self, tag_slug: Option<String>) -> Result<i64, AppError> {
        let count = if let Some(tag_slug) = tag_slug {
            sqlx::query_scalar::<_, i64>(
                "SELECT COUNT(*) FROM posts p \
                 WHERE p.status = 'published' \
                   AND EXISTS (SELECT 1 FROM post_tags pt \
                                 JOIN tags t ON t.id = pt.tag_id \
                                WHERE pt.post_id = p.id AND t.slug = $1)",
            )
            .bind(tag_slug)
            .fetch_one(self.pool.as_ref())
            .await?
        } else {
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts WHERE status = 'published'")
                .fetch_one(self.pool.as_ref())
                .await?
        };

        Ok(count)
    }

    async fn similar_to(&self, post_id: i64, limit: i64) -> Result<Vec<Post>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS}, \
                    (SELECT COUNT(*) FROM post_tags pt \
                      WHERE pt.post_id = p.id \
                        AND pt.tag_id IN (SELECT tag_id FROM post_tags \
                                           WHERE post_id = $1)) AS same_tags \
             {POST_FROM} \
             WHERE p.status = 'published' \
               AND p.id <> $1 \
               AND EXISTS (SELECT 1 FROM post_tags pt \
                            WHERE pt.post_id = p.id \
                              AND pt.tag_id IN (SELECT tag_id FROM post_tags \
                                                 WHERE post_id = $1)) \
             ORDER BY same_tags DESC, p.publish DESC \
             LIMIT $2"
        );

        let posts = sqlx::query_as::<_, Post>(&sql)
            .bind(post_id)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(posts)
    }

    async fn search_trigram(&self, query: &str, limit: i64) -> Result<Vec<Post>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} {POST_FROM} \
             WHERE p.status = 'published' \
               AND similarity(p.title, $1) > 0.1 \
             ORDER BY similarity(p.title, $1) DESC \
             LIMIT $2"
        );

        let posts = sqlx::query_as::<_, Post>(&sql)
            .bind(query)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(posts)
    }

    async fn search_fulltext(&self, query: &str, limit: i64) -> Result<Vec<Post>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} {POST_FROM} \
             WHERE p.status = 'published' \
               AND ({SEARCH_VECTOR}) @@ plainto_tsquery('english', $1) \
             ORDER BY ts_rank({SEARCH_VECTOR}, plainto_tsquery('english', $1)) DESC \
             LIMIT $2"
        );

        let posts = sqlx::query_as::<_, Post>(&sql)
            .bind(query)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(posts)
    }

    async fn latest(&self, limit: i64) -> Result<Vec<Post>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} {POST_FROM} \
             WHERE p.status = 'published' \
             ORDER BY p.publish DESC \
             LIMIT $1"
        );

        let posts = sqlx::query_as::<_, Post>(&sql)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(posts)
    }

    async fn most_commented(&self, limit: i64) -> Result<Vec<CommentedPost>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS}, \
                    (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS total_comments \
             {POST_FROM} \
             WHERE p.status = 'published' \
             ORDER BY total_comments DESC, p.publish DESC \
             LIMIT $1"
        );

        let posts = sqlx::query_as::<_, CommentedPost>(&sql)
            .bind(limit)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(posts)
    }

    async fn list(&self, status: Option<PostStatus>, limit: i64) -> Result<Vec<Post>, AppError> {
        let posts = if let Some(status) = status {
            let sql = format!(
                "SELECT {POST_COLUMNS} {POST_FROM} \
                 WHERE p.status = $1 \
                 ORDER BY p.publish DESC \
                 LIMIT $2"
            );

            sqlx::query_as::<_, Post>(&sql)
                .bind(status)
                .bind(limit)
                .fetch_all(self.pool.as_ref())
                .await?
        } else {
            let sql = format!(
                "SELECT {POST_COLUMNS} {POST_FROM} ORDER BY p.publish DESC LIMIT $1"
            );

            sqlx::query_as::<_, Post>(&sql)
                .bind(limit)
                .fetch_all(self.pool.as_ref())
                .await?
        };

        Ok(posts)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, AppError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} {POST_FROM} \
             WHERE p.slug = $1 \
             ORDER BY p.publish DESC \
             LIMIT 1"
        );

        let post = sqlx::query_as::<_, Post>(&sql)
            .bind(slug)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(post)
    }

    async fn publish(&self, slug: &str) -> Result<Option<Post>, AppError> {
        // Slugs may repeat across publish dates; promote the newest match.
        let id: Option<i64> = sqlx::query_scalar(
            r#"
            UPDATE posts
               SET status = 'published', updated = now()
             WHERE id = (SELECT id FROM posts WHERE slug = $1
                          ORDER BY publish DESC LIMIT 1)
            RETURNING id
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match id {
            Some(id) => Ok(Some(self.fetch_by_id(id).await?)),
            None => Ok(None),
        }
    }
}
