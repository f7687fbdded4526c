use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ContactError;

/// Contact form payload as it arrives over the wire
///
/// Every field is optional so that a missing key ends up as a validation
/// failure rather than a rejected request. Unknown keys are ignored.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawContactForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RawContactForm {
    /// Build a form from decoded key/value pairs, keeping the first value of a repeated key
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "name" => &mut form.name,
                "email" => &mut form.email,
                "message" => &mut form.message,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        form
    }

    /// Trim every field and check that none of them is empty
    pub fn validate(self) -> Result<ContactSubmission, ContactError> {
        let submission = ContactSubmission {
            name: trimmed(self.name),
            email: trimmed(self.email),
            message: trimmed(self.message),
        };

        submission.validate()?;

        Ok(submission)
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_owned()).unwrap_or_default()
}

/// One contact form submission. No email format check is enforced.
#[derive(Debug, Default, Clone, PartialEq, Eq, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub email: String,
    #[validate(length(min = 1))]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

impl From<ContactSubmission> for RawContactForm {
    fn from(value: ContactSubmission) -> Self {
        Self {
            name: Some(value.name),
            email: Some(value.email),
            message: Some(value.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn success() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}

impl From<Result<(), ContactError>> for SubmissionResult {
    fn from(value: Result<(), ContactError>) -> Self {
        match value {
            Ok(_) => Self::success(),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}
