mod common;

use axum::Router;
use axum::routing::get;
use axum_test::TestServer;
use blog_engine::web::handlers::sitemap_handler;
use chrono::{TimeZone, Utc};
use sqlx::PgPool;

fn server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/sitemap.xml", get(sitemap_handler))
        .nest("/blog", blog_engine::web::routes::routes())
        .with_state(state);

    TestServer::new(app).unwrap()
}

async fn seed_posts(pool: &PgPool, count: u32) {
    let author = common::create_test_author(pool, "admin").await;
    let long_body = (0..60).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");

    for i in 1..=count {
        common::create_test_post_with_body(
            pool,
            author,
            &format!("Feed post {i}"),
            &format!("feed-post-{i}"),
            "published",
            Utc.with_ymd_and_hms(2026, 1, i, 12, 0, 0).unwrap(),
            &long_body,
        )
        .await;
    }
}

#[sqlx::test]
async fn test_feed_lists_five_newest_posts(pool: PgPool) {
    seed_posts(&pool, 6).await;
    let server = server(pool);

    let response = server.get("/blog/rss").await;
    response.assert_status_ok();

    let content_type = response.header("content-type");
    assert!(
        content_type
            .to_str()
            .unwrap()
            .starts_with("application/rss+xml")
    );

    let xml = response.text();
    assert!(xml.contains("<rss"));
    assert!(xml.contains("<title>My blog</title>"));
    assert!(xml.contains("<description>New posts of my blog.</description>"));
    assert_eq!(xml.matches("<item>").count(), 5);
    assert!(xml.contains("Feed post 6"));
    assert!(!xml.contains("Feed post 1</title>"));
}

#[sqlx::test]
async fn test_feed_descriptions_are_truncated(pool: PgPool) {
    seed_posts(&pool, 1).await;
    let server = server(pool);

    let xml = server.get("/blog/rss").await.text();
    assert!(xml.contains("word29"));
    assert!(!xml.contains("word30"));
}

#[sqlx::test]
async fn test_feed_links_are_absolute(pool: PgPool) {
    seed_posts(&pool, 1).await;
    let server = server(pool);

    let xml = server.get("/blog/rss").await.text();
    assert!(xml.contains("<link>http://localhost:3000/blog/2026/1/1/feed-post-1</link>"));
}

#[sqlx::test]
async fn test_sitemap_lists_published_posts(pool: PgPool) {
    seed_posts(&pool, 2).await;
    let server = server(pool);

    let response = server.get("/sitemap.xml").await;
    response.assert_status_ok();

    let xml = response.text();
    assert!(xml.contains("<urlset"));
    assert!(xml.contains("<loc>http://localhost:3000/blog/2026/1/1/feed-post-1</loc>"));
    assert!(xml.contains("<loc>http://localhost:3000/blog/2026/1/2/feed-post-2</loc>"));
    assert!(xml.contains("<changefreq>weekly</changefreq>"));
}
