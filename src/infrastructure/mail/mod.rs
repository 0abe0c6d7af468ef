//! Outgoing mail: SMTP delivery with a logging fallback.

mod null_mailer;
mod smtp_mailer;

pub use null_mailer::NullMailer;
pub use smtp_mailer::SmtpMailer;

use async_trait::async_trait;

use crate::error::AppError;

/// A plain-text email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Trait for delivering share emails.
///
/// Implementations must be thread-safe. Delivery failures surface as
/// [`AppError::Mail`] so the share page can report them.
///
/// # Implementations
///
/// - [`SmtpMailer`] - SMTP relay delivery via lettre
/// - [`NullMailer`] - Logs the email instead of sending (SMTP unconfigured)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers a single email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Mail`] if the recipient address is invalid or the
    /// relay rejects the message.
    async fn send(&self, email: OutgoingEmail) -> Result<(), AppError>;

    /// Short human-readable transport description for the health endpoint.
    fn transport(&self) -> &'static str;
}
