use std::sync::Arc;

use exon_notification::{EmailConfig, Mailer, MailerError};

use crate::{ContactError, RawContactForm, SubmissionResult};

/// Validates contact submissions and forwards them to the site owner
///
/// The handler is stateless: every call is one independent attempt with at
/// most one delivery. A handler built without a mailer refuses every
/// submission with a configuration error.
#[derive(Clone)]
pub struct SubmissionHandler {
    mailer: Option<Arc<dyn Mailer>>,
    from: String,
    to: String,
}

impl SubmissionHandler {
    pub fn new(mailer: Arc<dyn Mailer>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            mailer: Some(mailer),
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn unconfigured(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            mailer: None,
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn from_config(config: &EmailConfig) -> Result<Self, MailerError> {
        Ok(Self {
            mailer: exon_notification::build_mailer(config)?,
            from: config.from_address.to_owned(),
            to: config.contact_address.to_owned(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.mailer.is_some()
    }

    /// Handle one submission. Never fails: errors become a failed result.
    #[tracing::instrument(skip_all)]
    pub async fn handle(&self, form: RawContactForm) -> SubmissionResult {
        let result = self.try_handle(form).await;

        match &result {
            Ok(_) => tracing::info!("Contact submission delivered"),
            Err(ContactError::Configuration) => {
                tracing::error!("Contact submission refused, email delivery credential is not set")
            }
            Err(ContactError::Validation(errors)) => {
                tracing::info!(%errors, "Contact submission rejected")
            }
            Err(ContactError::Delivery(err)) => {
                tracing::error!(error = %err, "Error sending contact email")
            }
        }

        result.into()
    }

    async fn try_handle(&self, form: RawContactForm) -> Result<(), ContactError> {
        let Some(mailer) = &self.mailer else {
            return Err(ContactError::Configuration);
        };

        let submission = form.validate()?;

        let email = exon_notification::contact::contact_notification(
            &self.from,
            &self.to,
            &submission.name,
            &submission.email,
            &submission.message,
        )?;

        mailer.send(&email).await?;

        Ok(())
    }
}
