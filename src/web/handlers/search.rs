//! Search page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};

use crate::application::services::Sidebar;
use crate::domain::entities::Post;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::filters;
use crate::web::forms::SearchParams;

/// Template for the search page.
///
/// `query` is `None` when the form has not been submitted yet; an empty
/// submission keeps `query` set so the page can ask for a term.
#[derive(Template, WebTemplate)]
#[template(path = "post/search.html")]
pub struct PostSearchTemplate {
    pub query: Option<String>,
    pub results: Vec<Post>,
    pub errors: Vec<String>,
    pub sidebar: Sidebar,
}

/// Renders the search form and, when a query is given, the ranked results.
///
/// # Endpoint
///
/// `GET /blog/search?query=term`
pub async fn post_search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<PostSearchTemplate, AppError> {
    let sidebar = state.posts.sidebar().await?;

    let (query, results, errors) = match params.query {
        None => (None, Vec::new(), Vec::new()),
        Some(raw) => {
            let term = raw.trim().to_string();
            if term.is_empty() {
                // Blank submission falls back to the form with a message.
                (None, Vec::new(), vec!["Enter a search term".to_string()])
            } else {
                let results = state.posts.search(&term).await?;
                (Some(term), results, Vec::new())
            }
        }
    };

    Ok(PostSearchTemplate {
        query,
        results,
        errors,
        sidebar,
    })
}
