//! Post detail page and comment submission handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::{Path, State};
use validator::Validate;

use crate::application::services::Sidebar;
use crate::domain::entities::{Comment, Post};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::filters;
use crate::web::forms::{CommentForm, error_messages};

/// Template for the post detail page.
///
/// `new_comment` is set right after a successful submission so the page can
/// confirm it; `errors` holds validation messages for a rejected one.
#[derive(Template, WebTemplate)]
#[template(path = "post/detail.html")]
pub struct PostDetailTemplate {
    pub post: Post,
    pub comments: Vec<Comment>,
    pub similar_posts: Vec<Post>,
    pub new_comment: Option<Comment>,
    pub form: CommentForm,
    pub errors: Vec<String>,
    pub sidebar: Sidebar,
}

/// Renders a published post with its comments and similar posts.
///
/// # Endpoint
///
/// `GET /blog/{year}/{month}/{day}/{slug}`
///
/// # Errors
///
/// Returns 404 for drafts, unknown slugs and impossible dates.
pub async fn post_detail_handler(
    State(state): State<AppState>,
    Path((year, month, day, slug)): Path<(i32, u32, u32, String)>,
) -> Result<PostDetailTemplate, AppError> {
    let post = state.posts.detail(year, month, day, &slug).await?;

    render_detail(&state, post, CommentForm::default(), Vec::new(), None).await
}

/// Handles a comment submission on the detail page.
///
/// # Endpoint
///
/// `POST /blog/{year}/{month}/{day}/{slug}`
///
/// A valid form stores the comment and re-renders the page with a
/// confirmation; an invalid one re-renders the form with the submitted
/// values and the validation messages.
pub async fn post_comment_handler(
    State(state): State<AppState>,
    Path((year, month, day, slug)): Path<(i32, u32, u32, String)>,
    Form(form): Form<CommentForm>,
) -> Result<PostDetailTemplate, AppError> {
    let post = state.posts.detail(year, month, day, &slug).await?;

    match form.validate() {
        Ok(()) => {
            let comment = state
                .comments
                .add(&post, form.name, form.email, form.body)
                .await?;

            render_detail(&state, post, CommentForm::default(), Vec::new(), Some(comment)).await
        }
        Err(errors) => {
            render_detail(&state, post, form, error_messages(&errors), None).await
        }
    }
}

async fn render_detail(
    state: &AppState,
    post: Post,
    form: CommentForm,
    errors: Vec<String>,
    new_comment: Option<Comment>,
) -> Result<PostDetailTemplate, AppError> {
    let comments = state.comments.list_active(post.id).await?;
    let similar_posts = state.posts.similar(post.id).await?;
    let sidebar = state.posts.sidebar().await?;

    Ok(PostDetailTemplate {
        post,
        comments,
        similar_posts,
        new_comment,
        form,
        errors,
        sidebar,
    })
}
