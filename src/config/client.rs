//! ONVO API client configuration

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Default ONVO API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.onvopay.com/v1";

/// API client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// ONVO secret API key (onvo_test_... or onvo_live_...)
    pub api_key: SecretString,

    /// API base URL, paths are appended verbatim
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::new(api_key.into()),
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check if using an ONVO test key
    pub fn is_test_mode(&self) -> bool {
        self.api_key.expose_secret().starts_with("onvo_test_")
    }

    /// Check if using an ONVO live key
    pub fn is_live_mode(&self) -> bool {
        self.api_key.expose_secret().starts_with("onvo_live_")
    }

    /// Validate client configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ValidationError::MissingRequired("ONVO__CLIENT__API_KEY"));
        }
        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}
