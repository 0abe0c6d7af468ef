//! Blog route configuration.

use axum::Router;
use axum::routing::get;

use crate::state::AppState;
use crate::web::handlers::{
    post_comment_handler, post_detail_handler, post_feed_handler, post_list_by_tag_handler,
    post_list_handler, post_search_handler, post_share_form_handler, post_share_send_handler,
};

/// Routes mounted under `/blog`.
///
/// # Endpoints
///
/// - `GET  /` - paginated post list
/// - `GET  /tag/{tag_slug}` - post list filtered by tag
/// - `GET  /search` - post search
/// - `GET  /rss` - RSS feed
/// - `GET  /{id}/share`, `POST /{id}/share` - share a post by email
/// - `GET  /{year}/{month}/{day}/{slug}` - post detail
/// - `POST /{year}/{month}/{day}/{slug}` - comment submission
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(post_list_handler))
        .route("/tag/{tag_slug}", get(post_list_by_tag_handler))
        .route("/search", get(post_search_handler))
        .route("/rss", get(post_feed_handler))
        .route(
            "/{id}/share",
            get(post_share_form_handler).post(post_share_send_handler),
        )
        .route(
            "/{year}/{month}/{day}/{slug}",
            get(post_detail_handler).post(post_comment_handler),
        )
}
