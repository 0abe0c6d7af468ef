//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{CommentService, FeedService, PostService, ShareService};
use crate::config::SiteSettings;
use crate::infrastructure::mail::Mailer;
use crate::infrastructure::persistence::{
    PgCommentRepository, PgPostRepository, PgTagRepository,
};

/// Concrete service types wired to the PostgreSQL repositories.
pub type Posts = PostService<PgPostRepository, PgTagRepository>;
pub type Comments = CommentService<PgCommentRepository>;
pub type Sharing = ShareService<PgPostRepository>;
pub type Feeds = FeedService<PgPostRepository>;

/// Application state shared across handlers via axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<Posts>,
    pub comments: Arc<Comments>,
    pub sharing: Arc<Sharing>,
    pub feeds: Arc<Feeds>,
    pub site: Arc<SiteSettings>,
    pub db: Arc<PgPool>,
    /// Transport name of the configured mailer, reported by `/health`.
    pub mail_transport: &'static str,
}

impl AppState {
    /// Wires repositories and services around a connection pool.
    pub fn new(pool: Arc<PgPool>, mailer: Arc<dyn Mailer>, site: SiteSettings) -> Self {
        let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
        let comment_repo = Arc::new(PgCommentRepository::new(pool.clone()));
        let tag_repo = Arc::new(PgTagRepository::new(pool.clone()));

        let mail_transport = mailer.transport();

        let posts = Arc::new(PostService::new(
            post_repo.clone(),
            tag_repo,
            site.page_size,
            site.search_mode,
        ));
        let comments = Arc::new(CommentService::new(comment_repo));
        let sharing = Arc::new(ShareService::new(
            post_repo.clone(),
            mailer,
            site.base_url.clone(),
        ));
        let feeds = Arc::new(FeedService::new(post_repo, site.clone()));

        Self {
            posts,
            comments,
            sharing,
            feeds,
            site: Arc::new(site),
            db: pool,
            mail_transport,
        }
    }
}
