use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use axum::Router;
use exon::AppState;
use exon_contact::SubmissionHandler;
use exon_notification::{EmailConfig, EmailMessage, Mailer, MailerError};

#[derive(Default)]
pub struct CountingMailer {
    pub fail: bool,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl CountingMailer {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Mailer for CountingMailer {
    async fn send(&self, _email: &EmailMessage) -> Result<(), MailerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(MailerError::Rejected {
                status: 500,
                body: "upstream exploded".to_owned(),
            });
        }

        Ok(())
    }
}

pub fn create_test_app(contact: SubmissionHandler) -> Router {
    exon::router(AppState { contact })
}

#[allow(dead_code)]
pub fn create_app_with_mailer(mailer: Arc<CountingMailer>) -> Router {
    let email = EmailConfig::default();
    create_test_app(SubmissionHandler::new(
        mailer,
        email.from_address,
        email.contact_address,
    ))
}
