//! Application error type shared across layers.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Error taxonomy for the blog service.
///
/// Handlers return `Result<_, AppError>`; the [`IntoResponse`] impl maps
/// each variant to an HTTP status and a minimal HTML body. Form validation
/// failures are not errors at this level: handlers re-render the page with
/// field messages instead (see [`crate::web::forms`]). The `Validation`
/// variant covers programmatic misuse and database constraint violations.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("database error")]
    Database(#[from] sqlx::Error),

    #[error("template rendering failed")]
    Template(#[from] askama::Error),

    #[error("mail delivery failed: {0}")]
    Mail(String),
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl From<lettre::error::Error> for AppError {
    fn from(e: lettre::error::Error) -> Self {
        Self::Mail(e.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for AppError {
    fn from(e: lettre::transport::smtp::Error) -> Self {
        Self::Mail(e.to_string())
    }
}

impl From<lettre::address::AddressError> for AppError {
    fn from(e: lettre::address::AddressError) -> Self {
        Self::Mail(format!("invalid address: {e}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::Database(e) => {
                eprintln!("DEBUG database error: {e}");
                tracing::error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Template(e) => {
                eprintln!("DEBUG template error: {e}");
                tracing::error!(error = %e, "template rendering failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            AppError::Mail(e) => {
                tracing::error!(error = %e, "mail delivery failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not send email".to_string(),
                )
            }
        };

        let body = Html(format!(
            "<!DOCTYPE html>\n<html><head><title>{code} {reason}</title></head>\
             <body><h1>{code} {reason}</h1><p>{message}</p>\
             <p><a href=\"/blog\">Back to the blog</a></p></body></html>",
            code = status.as_u16(),
            reason = status.canonical_reason().unwrap_or("Error"),
            message = message,
        ));

        (status, body).into_response()
    }
}

/// Maps a unique constraint violation onto a validation error with a
/// caller-supplied message; everything else passes through as `Database`.
pub fn map_unique_violation(e: sqlx::Error, message: &str) -> AppError {
    if let Some(db) = e.as_database_error()
        && db.is_unique_violation()
    {
        return AppError::validation(message.to_string());
    }

    AppError::Database(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = AppError::not_found("Post not found");
        assert_eq!(err.to_string(), "Post not found");
    }

    #[test]
    fn test_mail_error_from_address() {
        let parse_err = "not-an-address".parse::<lettre::Address>().unwrap_err();
        let err = AppError::from(parse_err);
        assert!(matches!(err, AppError::Mail(_)));
    }
}
