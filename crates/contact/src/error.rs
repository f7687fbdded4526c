use exon_notification::MailerError;

/// Why a contact submission was refused
///
/// The `Display` output is what the submitter sees. Sources are kept for the
/// operator logs only.
#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("Configuration error")]
    Configuration,

    #[error("Missing required fields")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Failed to send email")]
    Delivery(#[from] MailerError),
}
