use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use exon_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (RESEND_API_KEY)
    /// 2. Environment variables (EXON__EMAIL__API_KEY, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("EXON")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(api_key) = env::var("RESEND_API_KEY") {
            builder = builder.set_override("email.api_key", api_key)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// A missing delivery credential is not an error here: the site still
    /// serves pages and the contact handler refuses submissions.
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.email.from_address.trim().is_empty() {
            return Err("Email from_address must not be empty".to_string());
        }
        if self.email.contact_address.trim().is_empty() {
            return Err("Email contact_address must not be empty".to_string());
        }
        if self.email.timeout_secs == 0 {
            return Err("Email timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            email: EmailConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = config();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_empty_contact_address() {
        let mut config = config();
        config.email.contact_address = " ".to_string();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = config();
        config.email.timeout_secs = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_missing_credential_is_valid() {
        let config = config();

        assert!(config.email.credential().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_reads_config_file() {
        let path = std::env::temp_dir().join(format!("exon-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
[server]
port = 8080

[email]
contact_address = "owner@exon.localhost"
timeout_secs = 5
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.to_string_lossy().into_owned())).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.email.contact_address, "owner@exon.localhost");
        assert_eq!(config.email.timeout_secs, 5);
        assert_eq!(config.observability.log_level, "info");
    }
}
