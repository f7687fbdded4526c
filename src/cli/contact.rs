use std::sync::Arc;

use anyhow::Result;
use exon_contact::{ContactSubmission, FormController, FormStatus, HttpSubmitter};

/// Send one contact form to a running site and report the outcome
pub async fn contact(url: String, fields: ContactSubmission) -> Result<()> {
    let controller = FormController::new(Arc::new(HttpSubmitter::new(&url)));

    controller.open_contact().await;
    let status = controller.submit(fields).await;
    controller.close_contact().await;

    match &status {
        FormStatus::Success => {
            tracing::info!(url = %url, "{}", status.button_label());
            Ok(())
        }
        FormStatus::Error(message) => anyhow::bail!("{}: {message}", status.button_label()),
        other => anyhow::bail!("unexpected form status {other:?}"),
    }
}
