#![allow(dead_code)]

use std::sync::Arc;

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use url::Url;

use blog_engine::config::{SearchMode, SiteSettings};
use blog_engine::infrastructure::mail::NullMailer;
use blog_engine::state::AppState;

pub fn test_site(search_mode: SearchMode) -> SiteSettings {
    SiteSettings {
        base_url: Url::parse("http://localhost:3000").unwrap(),
        title: "My blog".to_string(),
        description: "New posts of my blog.".to_string(),
        page_size: 3,
        feed_size: 5,
        from_email: "admin@myblog.com".to_string(),
        search_mode,
    }
}

pub fn create_test_state(pool: PgPool) -> AppState {
    create_test_state_with_mode(pool, SearchMode::Trigram)
}

pub fn create_test_state_with_mode(pool: PgPool, search_mode: SearchMode) -> AppState {
    AppState::new(
        Arc::new(pool),
        Arc::new(NullMailer::new()),
        test_site(search_mode),
    )
}

pub async fn create_test_author(pool: &PgPool, username: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO authors (username, email) VALUES ($1, $2) RETURNING id",
    )
    .bind(username)
    .bind(format!("{username}@example.com"))
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_post(
    pool: &PgPool,
    author_id: i64,
    title: &str,
    slug: &str,
    status: &str,
    publish: DateTime<Utc>,
) -> i64 {
    create_test_post_with_body(pool, author_id, title, slug, status, publish, "Post body").await
}

pub async fn create_test_post_with_body(
    pool: &PgPool,
    author_id: i64,
    title: &str,
    slug: &str,
    status: &str,
    publish: DateTime<Utc>,
    body: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO posts (title, slug, author_id, body, publish, status) \
         VALUES ($1, $2, $3, $4, $5, $6) RETURNING id",
    )
    .bind(title)
    .bind(slug)
    .bind(author_id)
    .bind(body)
    .bind(publish)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_comment(
    pool: &PgPool,
    post_id: i64,
    name: &str,
    body: &str,
    active: bool,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO comments (post_id, name, email, body, active) \
         VALUES ($1, $2, $3, $4, $5) RETURNING id",
    )
    .bind(post_id)
    .bind(name)
    .bind(format!("{name}@example.com"))
    .bind(body)
    .bind(active)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn tag_test_post(pool: &PgPool, post_id: i64, name: &str) {
    let tag_id: i64 = sqlx::query_scalar(
        "INSERT INTO tags (name, slug) VALUES ($1, $2) \
         ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
         RETURNING id",
    )
    .bind(name)
    .bind(slug_of(name))
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO post_tags (post_id, tag_id) VALUES ($1, $2) ON CONFLICT DO NOTHING")
        .bind(post_id)
        .bind(tag_id)
        .execute(pool)
        .await
        .unwrap();
}

fn slug_of(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

pub async fn comment_count(pool: &PgPool, post_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM comments WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
