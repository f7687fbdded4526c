use anyhow::Context;
use async_trait::async_trait;

use crate::{RawContactForm, SubmissionResult, Submitter};

/// Posts the contact form to a running site, the way the browser does
#[derive(Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    pub fn new(site_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/contact", site_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, form: RawContactForm) -> anyhow::Result<SubmissionResult> {
        let response = self
            .client
            .post(&self.endpoint)
            .form(&form)
            .send()
            .await
            .with_context(|| format!("failed to reach {}", self.endpoint))?
            .error_for_status()?;

        response
            .json::<SubmissionResult>()
            .await
            .context("invalid submission result")
    }
}
