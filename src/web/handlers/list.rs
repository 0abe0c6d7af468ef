//! Post list page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};

use crate::application::services::{PostListing, Sidebar};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::filters;
use crate::web::forms::ListParams;

/// Template for the paginated post list, shared by the plain and the
/// tag-filtered views.
#[derive(Template, WebTemplate)]
#[template(path = "post/list.html")]
pub struct PostListTemplate {
    pub listing: PostListing,
    pub sidebar: Sidebar,
}

/// Renders the list of published posts, three per page.
///
/// # Endpoint
///
/// `GET /blog?page=N`
///
/// A missing or non-integer `page` shows the first page; an out-of-range
/// one shows the last.
pub async fn post_list_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<PostListTemplate, AppError> {
    render_list(&state, params, None).await
}

/// Renders the post list filtered by tag.
///
/// # Endpoint
///
/// `GET /blog/tag/{tag_slug}?page=N`
///
/// # Errors
///
/// Returns 404 when the tag does not exist.
pub async fn post_list_by_tag_handler(
    State(state): State<AppState>,
    Path(tag_slug): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<PostListTemplate, AppError> {
    render_list(&state, params, Some(tag_slug)).await
}

async fn render_list(
    state: &AppState,
    params: ListParams,
    tag_slug: Option<String>,
) -> Result<PostListTemplate, AppError> {
    let listing = state
        .posts
        .page(params.page.as_deref(), tag_slug.as_deref())
        .await?;
    let sidebar = state.posts.sidebar().await?;

    Ok(PostListTemplate { listing, sidebar })
}
