//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /`            - Redirect to the blog index
//! - `GET /health`      - Health check (public)
//! - `GET /sitemap.xml` - Sitemap of published posts
//! - `/blog/*`          - Blog pages (list, detail, share, search, feed)
//! - `/static/*`        - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `/blog/search/`
//!   and `/blog/search` behave alike

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

use crate::state::AppState;
use crate::web;
use crate::web::handlers::{health_handler, sitemap_handler};
use crate::web::middleware::tracing;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(|| async { Redirect::permanent("/blog") }))
        .route("/health", get(health_handler))
        .route("/sitemap.xml", get(sitemap_handler))
        .nest("/blog", web::routes::routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
