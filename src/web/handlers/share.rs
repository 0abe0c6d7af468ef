//! Share-by-email page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::Form;
use axum::extract::{Path, State};
use validator::Validate;

use crate::application::services::{ShareRequest, Sidebar};
use crate::domain::entities::Post;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::forms::{ShareForm, error_messages};

/// Template for the share page; `sent` switches between the form and the
/// confirmation message.
#[derive(Template, WebTemplate)]
#[template(path = "post/share.html")]
pub struct PostShareTemplate {
    pub post: Post,
    pub form: ShareForm,
    pub errors: Vec<String>,
    pub sent: bool,
    pub sidebar: Sidebar,
}

/// Renders the empty share form for a published post.
///
/// # Endpoint
///
/// `GET /blog/{id}/share`
///
/// # Errors
///
/// Returns 404 when the post is missing or a draft.
pub async fn post_share_form_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<PostShareTemplate, AppError> {
    let post = state.posts.published_by_id(id).await?;

    render_share(&state, post, ShareForm::default(), Vec::new(), false).await
}

/// Validates the share form and sends the recommendation email.
///
/// # Endpoint
///
/// `POST /blog/{id}/share`
pub async fn post_share_send_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ShareForm>,
) -> Result<PostShareTemplate, AppError> {
    let post = state.posts.published_by_id(id).await?;

    match form.validate() {
        Ok(()) => {
            state
                .sharing
                .share(
                    post.id,
                    ShareRequest {
                        name: form.name.clone(),
                        to: form.to.clone(),
                        comments: form.comments.clone(),
                    },
                )
                .await?;

            // Keep the submitted values so the confirmation can name the
            // recipient.
            render_share(&state, post, form, Vec::new(), true).await
        }
        Err(errors) => {
            render_share(&state, post, form, error_messages(&errors), false).await
        }
    }
}

async fn render_share(
    state: &AppState,
    post: Post,
    form: ShareForm,
    errors: Vec<String>,
    sent: bool,
) -> Result<PostShareTemplate, AppError> {
    let sidebar = state.posts.sidebar().await?;

    Ok(PostShareTemplate {
        post,
        form,
        errors,
        sent,
        sidebar,
    })
}
