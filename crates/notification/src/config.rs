use serde::Deserialize;

/// Transactional email provider used to deliver notifications
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Resend,
    Smtp,
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub provider: Provider,
    /// Resend API key, the delivery credential when `provider = "resend"`
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password, the delivery credential when `provider = "smtp"`
    #[serde(default)]
    pub smtp_password: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            api_key: None,
            api_base_url: default_api_base_url(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EmailConfig {
    /// Credential of the selected provider, `None` when unset or blank
    pub fn credential(&self) -> Option<&str> {
        let value = match self.provider {
            Provider::Resend => self.api_key.as_deref(),
            Provider::Smtp => self.smtp_password.as_deref(),
        };

        value.map(str::trim).filter(|v| !v.is_empty())
    }
}

fn default_api_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_from_address() -> String {
    "Exon Enterprise <contact@exonenterprise.com>".to_string()
}

fn default_contact_address() -> String {
    "ryan@mandarin3d.com".to_string()
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_timeout_secs() -> u64 {
    30
}
