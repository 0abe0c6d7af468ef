//! Logging mailer used when SMTP is not configured.

use async_trait::async_trait;
use tracing::debug;

use super::{Mailer, OutgoingEmail};
use crate::error::AppError;

/// A mailer that logs emails instead of delivering them.
///
/// # Use Cases
///
/// - Development environments without an SMTP relay
/// - Integration tests exercising the share flow
#[derive(Default)]
pub struct NullMailer;

impl NullMailer {
    /// Creates a new NullMailer instance.
    pub fn new() -> Self {
        debug!("Using NullMailer (mail delivery disabled)");
        Self
    }
}

#[async_trait]
impl Mailer for NullMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), AppError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "mail delivery disabled, logging share email instead"
        );

        Ok(())
    }

    fn transport(&self) -> &'static str {
        "null"
    }
}
