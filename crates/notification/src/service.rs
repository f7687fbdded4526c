//! Email delivery abstraction shared by the Resend and SMTP transports

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;

use crate::{EmailConfig, Provider, ResendMailer, SmtpMailer};

/// A fully rendered email ready to hand to a delivery service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("failed to render email template: {0}")]
    Template(#[from] askama::Error),

    #[error("http request to delivery service failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("delivery service rejected email with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("failed to build email message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("smtp error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("smtp task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Delivery capability: one call is one delivery attempt, no retry
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &EmailMessage) -> Result<(), MailerError>;
}

/// Build the mailer for the configured provider
///
/// Returns `Ok(None)` when the provider credential is missing so callers can
/// refuse deliveries instead of failing to boot.
pub fn build_mailer(config: &EmailConfig) -> Result<Option<Arc<dyn Mailer>>, MailerError> {
    let Some(credential) = config.credential() else {
        tracing::error!(
            provider = ?config.provider,
            "Email delivery credential is not set, contact submissions will be refused"
        );
        return Ok(None);
    };

    let timeout = Duration::from_secs(config.timeout_secs);

    let mailer: Arc<dyn Mailer> = match config.provider {
        Provider::Resend => Arc::new(ResendMailer::new(
            &config.api_base_url,
            credential,
            timeout,
        )?),
        Provider::Smtp => Arc::new(SmtpMailer::new(config, credential, timeout)?),
    };

    tracing::info!(provider = ?config.provider, "Email delivery initialized");

    Ok(Some(mailer))
}
