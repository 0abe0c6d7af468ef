//! RSS feed and sitemap handlers.

use askama::Template;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;

use crate::application::services::SitemapEntry;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the XML sitemap.
#[derive(Template)]
#[template(path = "sitemap.xml")]
struct SitemapTemplate {
    entries: Vec<SitemapEntry>,
}

/// Serves the RSS feed with the latest published posts.
///
/// # Endpoint
///
/// `GET /blog/rss`
pub async fn post_feed_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let channel = state.feeds.channel().await?;

    Ok((
        [(header::CONTENT_TYPE, "application/rss+xml; charset=utf-8")],
        channel.to_string(),
    ))
}

/// Serves the sitemap of all published posts.
///
/// # Endpoint
///
/// `GET /sitemap.xml`
pub async fn sitemap_handler(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let entries = state.feeds.sitemap_entries().await?;
    let body = SitemapTemplate { entries }.render()?;

    Ok((
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        body,
    ))
}
