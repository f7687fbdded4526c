//! Contact modal state driven by a single submission at a time

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use tokio::{sync::Mutex, task::AbortHandle};

use crate::{ContactSubmission, RawContactForm, SubmissionHandler, SubmissionResult};

/// Delay before a successful submission closes the modal
pub const AUTO_CLOSE_DELAY: Duration = Duration::from_secs(2);

const UNEXPECTED_FAILURE: &str = "Failed to send email";

/// Anything able to carry a contact form to a submission handler
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, form: RawContactForm) -> anyhow::Result<SubmissionResult>;
}

#[async_trait]
impl Submitter for SubmissionHandler {
    async fn submit(&self, form: RawContactForm) -> anyhow::Result<SubmissionResult> {
        Ok(self.handle(form).await)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error(String),
}

impl FormStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, FormStatus::Pending)
    }

    /// A new submission is refused while one is in flight and while the
    /// success notice is shown.
    pub fn accepts_submission(&self) -> bool {
        !matches!(self, FormStatus::Pending | FormStatus::Success)
    }

    /// Label of the submit button. Empty while pending, a spinner is shown instead.
    /// On success the button gives way to the success notice.
    pub fn button_label(&self) -> &'static str {
        match self {
            FormStatus::Idle => "Send Message",
            FormStatus::Pending => "",
            FormStatus::Success => "Message Sent Successfully!",
            FormStatus::Error(_) => "Failed to Send",
        }
    }
}

#[derive(Default)]
struct Inner {
    open: bool,
    status: FormStatus,
    fields: ContactSubmission,
    // bumped on every open/close so a stale timer never touches a new session
    session: u64,
    auto_close: Option<AbortHandle>,
}

impl Inner {
    fn cancel_auto_close(&mut self) {
        if let Some(handle) = self.auto_close.take() {
            handle.abort();
        }
    }

    fn reset(&mut self) {
        self.open = false;
        self.status = FormStatus::Idle;
        self.fields = ContactSubmission::default();
    }
}

/// Owns the contact modal visibility, the field draft and the submission status
#[derive(Clone)]
pub struct FormController {
    inner: Arc<Mutex<Inner>>,
    submitter: Arc<dyn Submitter>,
    auto_close_delay: Duration,
}

impl FormController {
    pub fn new(submitter: Arc<dyn Submitter>) -> Self {
        Self::with_delay(submitter, AUTO_CLOSE_DELAY)
    }

    pub fn with_delay(submitter: Arc<dyn Submitter>, auto_close_delay: Duration) -> Self {
        Self {
            inner: Arc::default(),
            submitter,
            auto_close_delay,
        }
    }

    pub async fn status(&self) -> FormStatus {
        self.inner.lock().await.status.clone()
    }

    pub async fn is_open(&self) -> bool {
        self.inner.lock().await.open
    }

    pub async fn fields(&self) -> ContactSubmission {
        self.inner.lock().await.fields.clone()
    }

    pub async fn submit_enabled(&self) -> bool {
        let inner = self.inner.lock().await;
        inner.open && inner.status.accepts_submission()
    }

    /// Edit the field draft, e.g. after an error before resubmitting
    pub async fn edit_fields(&self, edit: impl FnOnce(&mut ContactSubmission)) {
        edit(&mut self.inner.lock().await.fields);
    }

    pub async fn open_contact(&self) {
        let mut inner = self.inner.lock().await;
        inner.cancel_auto_close();
        inner.session += 1;
        inner.open = true;

        if inner.status == FormStatus::Success {
            inner.status = FormStatus::Idle;
        }
    }

    /// Close the modal and drop the field draft
    ///
    /// An in-flight submission cannot be cancelled, the status stays pending
    /// until it returns.
    pub async fn close_contact(&self) {
        let mut inner = self.inner.lock().await;
        inner.cancel_auto_close();
        inner.session += 1;

        let pending = inner.status.is_pending();
        inner.reset();
        if pending {
            inner.status = FormStatus::Pending;
        }
    }

    /// Submit the fields and wait for the outcome
    ///
    /// Does nothing and returns the current status while another submission
    /// is in flight, after a success until the modal closes or is reopened,
    /// or while the modal is closed. If the modal gets closed before the
    /// outcome arrives, the outcome is dropped.
    pub async fn submit(&self, fields: ContactSubmission) -> FormStatus {
        {
            let mut inner = self.inner.lock().await;
            if !inner.status.accepts_submission() || !inner.open {
                return inner.status.clone();
            }

            inner.cancel_auto_close();
            inner.fields = fields.clone();
            inner.status = FormStatus::Pending;
        }

        let outcome = self.submitter.submit(fields.into()).await;

        let mut inner = self.inner.lock().await;
        inner.status = match outcome {
            Ok(result) if result.success => FormStatus::Success,
            Ok(result) => FormStatus::Error(
                result
                    .error
                    .unwrap_or_else(|| UNEXPECTED_FAILURE.to_owned()),
            ),
            Err(err) => {
                tracing::warn!(error = %err, "Contact submission failed unexpectedly");
                FormStatus::Error(UNEXPECTED_FAILURE.to_owned())
            }
        };

        if !inner.open {
            // closed while in flight, nothing left to show the outcome in
            inner.reset();
        } else if inner.status == FormStatus::Success {
            let handle = self.schedule_auto_close(inner.session);
            inner.auto_close = Some(handle);
        }

        inner.status.clone()
    }

    fn schedule_auto_close(&self, session: u64) -> AbortHandle {
        let inner = self.inner.clone();
        let delay = self.auto_close_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let mut inner = inner.lock().await;
            if inner.session == session {
                inner.auto_close = None;
                inner.reset();
            }
        })
        .abort_handle()
    }
}
