//! Form DTOs for the HTML views.
//!
//! Validation failures are part of the page flow, not HTTP errors: handlers
//! re-render the page with the submitted values and the messages produced
//! by [`error_messages`].

use serde::Deserialize;
use validator::{Validate, ValidationErrors};

/// Comment form shown on the post detail page.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CommentForm {
    #[validate(length(min = 1, max = 80, message = "Name must be 1 to 80 characters"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, message = "Comment cannot be empty"))]
    pub body: String,
}

/// Share-by-email form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ShareForm {
    #[validate(length(min = 1, max = 25, message = "Name must be 1 to 25 characters"))]
    pub name: String,

    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,

    #[validate(email(message = "Enter a valid recipient address"))]
    pub to: String,

    #[serde(default)]
    pub comments: String,
}

/// Query parameters of the list views.
///
/// `page` stays a raw string: bad values pick a fallback page instead of
/// failing extraction (see [`crate::application::pagination::PageInfo`]).
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

/// Query parameters of the search page.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Flattens validation errors into per-field messages, sorted by field so
/// rendering is stable.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                match &error.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: invalid value"),
                }
            })
        })
        .collect();

    messages.sort();
    messages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_form_valid() {
        let form = CommentForm {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            body: "Nice post".to_string(),
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_comment_form_rejects_bad_email_and_empty_body() {
        let form = CommentForm {
            name: "Ann".to_string(),
            email: "not-an-email".to_string(),
            body: String::new(),
        };

        let errors = form.validate().unwrap_err();
        let messages = error_messages(&errors);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].starts_with("body:"));
        assert!(messages[1].starts_with("email:"));
    }

    #[test]
    fn test_share_form_name_length_cap() {
        let form = ShareForm {
            name: "x".repeat(26),
            email: "ann@example.com".to_string(),
            to: "friend@example.com".to_string(),
            comments: String::new(),
        };

        let errors = form.validate().unwrap_err();
        assert!(error_messages(&errors)[0].starts_with("name:"));
    }

    #[test]
    fn test_share_form_comments_are_optional() {
        let form = ShareForm {
            name: "Ann".to_string(),
            email: "ann@example.com".to_string(),
            to: "friend@example.com".to_string(),
            comments: String::new(),
        };

        assert!(form.validate().is_ok());
    }
}
