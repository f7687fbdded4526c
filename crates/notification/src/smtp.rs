//! SMTP transport using lettre

use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    Message, SmtpTransport, Transport, message::MultiPart,
    transport::smtp::authentication::Credentials,
};

use crate::{EmailConfig, EmailMessage, Mailer, MailerError};

#[derive(Clone)]
pub struct SmtpMailer {
    mailer: SmtpTransport,
}

impl SmtpMailer {
    pub fn new(
        config: &EmailConfig,
        password: &str,
        timeout: Duration,
    ) -> Result<Self, MailerError> {
        tracing::info!(
            smtp_host = %config.smtp_host,
            smtp_port = config.smtp_port,
            "SMTP transport initialized with authentication and TLS"
        );

        let creds = Credentials::new(config.smtp_username.clone(), password.to_owned());

        // relay() negotiates STARTTLS, which is what port 587 expects
        let mailer = SmtpTransport::relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(creds)
            .timeout(Some(timeout))
            .build();

        Ok(Self { mailer })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    #[tracing::instrument(skip_all, fields(to = %email.to, subject = %email.subject))]
    async fn send(&self, email: &EmailMessage) -> Result<(), MailerError> {
        tracing::info!("Sending email through SMTP");

        let message = Message::builder()
            .from(email.from.parse()?)
            .to(email.to.parse()?)
            .subject(email.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                email.text.clone(),
                email.html.clone(),
            ))?;

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message)).await??;

        Ok(())
    }
}
