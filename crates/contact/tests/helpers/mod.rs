use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use exon_contact::{RawContactForm, SubmissionHandler, SubmissionResult, Submitter};
use exon_notification::{EmailMessage, Mailer, MailerError};

pub const FROM: &str = "Exon Enterprise <contact@exonenterprise.com>";
pub const TO: &str = "owner@exon.localhost";

/// Mailer double recording every delivery attempt
#[derive(Default)]
pub struct RecordingMailer {
    pub fail: bool,
    pub sent: Mutex<Vec<EmailMessage>>,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last(&self) -> Option<EmailMessage> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &EmailMessage) -> Result<(), MailerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(MailerError::Rejected {
                status: 401,
                body: r#"{"name":"restricted_api_key","message":"secret-internal-detail"}"#
                    .to_owned(),
            });
        }

        self.sent.lock().unwrap().push(email.clone());

        Ok(())
    }
}

#[allow(dead_code)]
pub fn handler(mailer: Arc<RecordingMailer>) -> SubmissionHandler {
    SubmissionHandler::new(mailer, FROM, TO)
}

/// Submitter double answering with a fixed outcome after an optional delay
#[allow(dead_code)]
pub enum Outcome {
    Result(SubmissionResult),
    Unexpected,
}

#[allow(dead_code)]
pub struct StubSubmitter {
    pub outcome: Outcome,
    pub latency: Duration,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl StubSubmitter {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            outcome,
            latency: Duration::ZERO,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_latency(outcome: Outcome, latency: Duration) -> Self {
        Self {
            latency,
            ..Self::new(outcome)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Submitter for StubSubmitter {
    async fn submit(&self, _form: RawContactForm) -> anyhow::Result<SubmissionResult> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;

        match &self.outcome {
            Outcome::Result(result) => Ok(result.clone()),
            Outcome::Unexpected => Err(anyhow::anyhow!("connection reset by peer")),
        }
    }
}
