//! SMTP mailer backed by lettre.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{Mailer, OutgoingEmail};
use crate::config::SmtpConfig;
use crate::error::AppError;

/// Delivers mail through an SMTP relay using STARTTLS.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Builds a mailer from relay settings and a sender address.
    ///
    /// Credentials are only attached when a username is configured, so
    /// unauthenticated relays (local dev) work too.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Mail`] if the relay host or sender address is
    /// invalid.
    pub fn new(config: &SmtpConfig, from: &str) -> Result<Self, AppError> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        let from = from
            .parse::<Mailbox>()
            .map_err(|e| AppError::Mail(format!("invalid sender address: {e}")))?;

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<(), AppError> {
        let to = email
            .to
            .parse::<Mailbox>()
            .map_err(|e| AppError::Mail(format!("invalid recipient address: {e}")))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(&email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.body)?;

        self.transport.send(message).await?;
        tracing::info!(to = %email.to, subject = %email.subject, "share email sent");

        Ok(())
    }

    fn transport(&self) -> &'static str {
        "smtp"
    }
}
