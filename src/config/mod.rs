// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::RezizerError;

pub mod logging;

pub use logging::{LogFormat, LoggingConfig};

/// Connection settings for the image service
///
/// ```yaml
/// server_url: "https://img.example.com"
/// secret: "${REZIZER_SECRET}"
/// logging:
///   level: debug
///   format: pretty
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RezizerConfig {
    /// Base URL of the image service, without trailing slash
    pub server_url: String,
    /// HMAC key; URLs are unsigned when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl RezizerConfig {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            secret: None,
            logging: LoggingConfig::default(),
        }
    }

    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, RezizerError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| RezizerError::config(e.to_string()))?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                RezizerError::config(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        serde_yaml::from_str(&substituted).map_err(|e| RezizerError::config(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RezizerError> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| RezizerError::config(format!("Failed to read config file: {}", e)))?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), RezizerError> {
        if self.server_url.trim().is_empty() {
            return Err(RezizerError::config("server_url cannot be empty"));
        }

        if self.server_url.ends_with('/') {
            return Err(RezizerError::config(format!(
                "server_url '{}' must not end with /",
                self.server_url
            )));
        }

        // An empty secret would silently produce unsigned URLs
        if matches!(&self.secret, Some(secret) if secret.is_empty()) {
            return Err(RezizerError::config(
                "secret cannot be empty; omit it to generate unsigned URLs",
            ));
        }

        self.logging.validate()
    }
}
