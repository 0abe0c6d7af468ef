mod common;

use std::sync::Arc;

use blog_engine::AppError;
use blog_engine::domain::entities::{NewPost, PostStatus};
use blog_engine::domain::repositories::PostRepository;
use blog_engine::infrastructure::persistence::PgPostRepository;
use chrono::{NaiveDate, TimeZone, Utc};
use sqlx::PgPool;

fn repo(pool: &PgPool) -> PgPostRepository {
    PgPostRepository::new(Arc::new(pool.clone()))
}

#[sqlx::test]
async fn test_create_resolves_author_and_defaults(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    let repo = repo(&pool);

    let post = repo
        .create(NewPost {
            title: "First post".to_string(),
            slug: "first-post".to_string(),
            author_id: author,
            body: "Body".to_string(),
            publish: None,
            status: PostStatus::Draft,
        })
        .await
        .unwrap();

    assert_eq!(post.author, "admin");
    assert_eq!(post.status, PostStatus::Draft);
    assert!(post.tags.is_empty());
    assert!(!post.uuid.is_nil());
}

#[sqlx::test]
async fn test_duplicate_slug_on_same_date_is_rejected(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    let repo = repo(&pool);

    let publish = Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap();
    let new_post = |title: &str| NewPost {
        title: title.to_string(),
        slug: "same-slug".to_string(),
        author_id: author,
        body: "Body".to_string(),
        publish: Some(publish),
        status: PostStatus::Published,
    };

    repo.create(new_post("One")).await.unwrap();
    let err = repo.create(new_post("Two")).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[sqlx::test]
async fn test_same_slug_on_other_date_is_allowed(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    let repo = repo(&pool);

    for day in [1, 2] {
        repo.create(NewPost {
            title: format!("Post {day}"),
            slug: "same-slug".to_string(),
            author_id: author,
            body: "Body".to_string(),
            publish: Some(Utc.with_ymd_and_hms(2026, 6, day, 9, 0, 0).unwrap()),
            status: PostStatus::Published,
        })
        .await
        .unwrap();
    }
}

#[sqlx::test]
async fn test_find_published_by_date_slug(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    common::create_test_post(
        &pool,
        author,
        "Dated post",
        "dated-post",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 1, 23, 30, 0).unwrap(),
    )
    .await;

    let repo = repo(&pool);
    let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

    let found = repo
        .find_published_by_date_slug(date, "dated-post")
        .await
        .unwrap();
    assert!(found.is_some());

    let other_day = NaiveDate::from_ymd_opt(2026, 6, 2).unwrap();
    let missing = repo
        .find_published_by_date_slug(other_day, "dated-post")
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_find_published_by_date_slug_ignores_drafts(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    common::create_test_post(
        &pool,
        author,
        "Draft post",
        "draft-post",
        "draft",
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
    )
    .await;

    let repo = repo(&pool);
    let date = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

    let found = repo
        .find_published_by_date_slug(date, "draft-post")
        .await
        .unwrap();
    assert!(found.is_none());
}

#[sqlx::test]
async fn test_list_published_orders_newest_first(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    for day in 1..=3 {
        common::create_test_post(
            &pool,
            author,
            &format!("Post {day}"),
            &format!("post-{day}"),
            "published",
            Utc.with_ymd_and_hms(2026, 6, day, 9, 0, 0).unwrap(),
        )
        .await;
    }

    let repo = repo(&pool);
    let posts = repo.list_published(None, 0, 2).await.unwrap();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].slug, "post-3");
    assert_eq!(posts[1].slug, "post-2");

    let rest = repo.list_published(None, 2, 2).await.unwrap();
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].slug, "post-1");
}

#[sqlx::test]
async fn test_count_published_with_tag_filter(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    let tagged = common::create_test_post(
        &pool,
        author,
        "Tagged",
        "tagged",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
    )
    .await;
    common::create_test_post(
        &pool,
        author,
        "Untagged",
        "untagged",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 2, 9, 0, 0).unwrap(),
    )
    .await;
    common::tag_test_post(&pool, tagged, "rust").await;

    let repo = repo(&pool);
    assert_eq!(repo.count_published(None).await.unwrap(), 2);
    assert_eq!(
        repo.count_published(Some("rust".to_string())).await.unwrap(),
        1
    );
    assert_eq!(
        repo.count_published(Some("nope".to_string())).await.unwrap(),
        0
    );
}

#[sqlx::test]
async fn test_posts_carry_their_tag_names(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    let post = common::create_test_post(
        &pool,
        author,
        "Tagged",
        "tagged",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
    )
    .await;
    common::tag_test_post(&pool, post, "rust").await;
    common::tag_test_post(&pool, post, "axum").await;

    let repo = repo(&pool);
    let posts = repo.list_published(None, 0, 10).await.unwrap();

    assert_eq!(posts[0].tags, vec!["axum".to_string(), "rust".to_string()]);
}

#[sqlx::test]
async fn test_similar_to_ranks_by_shared_tags(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;

    let current = common::create_test_post(
        &pool,
        author,
        "Current",
        "current",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 10, 9, 0, 0).unwrap(),
    )
    .await;
    let close = common::create_test_post(
        &pool,
        author,
        "Close",
        "close",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
    )
    .await;
    let distant = common::create_test_post(
        &pool,
        author,
        "Distant",
        "distant",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 2, 9, 0, 0).unwrap(),
    )
    .await;
    common::create_test_post(
        &pool,
        author,
        "Unrelated",
        "unrelated",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 3, 9, 0, 0).unwrap(),
    )
    .await;

    for name in ["rust", "web"] {
        common::tag_test_post(&pool, current, name).await;
        common::tag_test_post(&pool, close, name).await;
    }
    common::tag_test_post(&pool, distant, "rust").await;

    let repo = repo(&pool);
    let similar = repo.similar_to(current, 4).await.unwrap();

    let slugs: Vec<&str> = similar.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["close", "distant"]);
}

#[sqlx::test]
async fn test_search_trigram_ignores_dissimilar_titles(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    common::create_test_post(
        &pool,
        author,
        "Learning Rust",
        "learning-rust",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
    )
    .await;
    common::create_test_post(
        &pool,
        author,
        "Cooking pasta",
        "cooking-pasta",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 2, 9, 0, 0).unwrap(),
    )
    .await;

    let repo = repo(&pool);
    let results = repo.search_trigram("Learning Rust", 10).await.unwrap();

    let slugs: Vec<&str> = results.iter().map(|p| p.slug.as_str()).collect();
    assert!(slugs.contains(&"learning-rust"));
    assert!(!slugs.contains(&"cooking-pasta"));
}

#[sqlx::test]
async fn test_search_fulltext_weighs_title_over_body(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    common::create_test_post_with_body(
        &pool,
        author,
        "Rust notes",
        "rust-notes",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
        "General programming thoughts",
    )
    .await;
    common::create_test_post_with_body(
        &pool,
        author,
        "Weekly journal",
        "weekly-journal",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 2, 9, 0, 0).unwrap(),
        "This week I tried Rust",
    )
    .await;

    let repo = repo(&pool);
    let results = repo.search_fulltext("rust", 10).await.unwrap();

    let slugs: Vec<&str> = results.iter().map(|p| p.slug.as_str()).collect();
    // Both match, the title match ranks first.
    assert_eq!(slugs, vec!["rust-notes", "weekly-journal"]);
}

#[sqlx::test]
async fn test_most_commented_counts_all_comments(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    let quiet = common::create_test_post(
        &pool,
        author,
        "Quiet",
        "quiet",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
    )
    .await;
    let busy = common::create_test_post(
        &pool,
        author,
        "Busy",
        "busy",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 2, 9, 0, 0).unwrap(),
    )
    .await;

    common::create_test_comment(&pool, busy, "Ann", "First", true).await;
    common::create_test_comment(&pool, busy, "Bob", "Second", false).await;
    common::create_test_comment(&pool, quiet, "Cid", "Only", true).await;

    let repo = repo(&pool);
    let ranked = repo.most_commented(5).await.unwrap();

    assert_eq!(ranked[0].post.slug, "busy");
    // Hidden comments still count toward the ranking.
    assert_eq!(ranked[0].total_comments, 2);
    assert_eq!(ranked[1].post.slug, "quiet");
    assert_eq!(ranked[1].total_comments, 1);
}

#[sqlx::test]
async fn test_publish_promotes_a_draft(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    common::create_test_post(
        &pool,
        author,
        "Draft",
        "a-draft",
        "draft",
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
    )
    .await;

    let repo = repo(&pool);

    let published = repo.publish("a-draft").await.unwrap().unwrap();
    assert_eq!(published.status, PostStatus::Published);

    assert!(repo.publish("no-such-slug").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_filters_by_status(pool: PgPool) {
    let author = common::create_test_author(&pool, "admin").await;
    common::create_test_post(
        &pool,
        author,
        "Draft",
        "a-draft",
        "draft",
        Utc.with_ymd_and_hms(2026, 6, 1, 9, 0, 0).unwrap(),
    )
    .await;
    common::create_test_post(
        &pool,
        author,
        "Live",
        "live",
        "published",
        Utc.with_ymd_and_hms(2026, 6, 2, 9, 0, 0).unwrap(),
    )
    .await;

    let repo = repo(&pool);

    assert_eq!(repo.list(None, 10).await.unwrap().len(), 2);

    let drafts = repo.list(Some(PostStatus::Draft), 10).await.unwrap();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].slug, "a-draft");
}
