//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ONVO` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use onvo_pay::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Webhooks served at {}", config.server.webhook_path);
//! ```

mod client;
mod error;
mod server;

pub use client::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// ONVO API client configuration (key, base URL, timeout)
    ///
    /// Absent when no `ONVO__CLIENT__*` variable is set; the webhook receiver
    /// runs without it.
    #[serde(default)]
    pub client: Option<ClientConfig>,

    /// Webhook receiver configuration (host, port, path)
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ONVO` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ONVO__CLIENT__API_KEY=onvo_test_...` -> `client.api_key = ...`
    /// - `ONVO__SERVER__PORT=8080` -> `server.port = 8080`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ONVO")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(client) = &self.client {
            client.validate()?;
        }
        self.server.validate()?;
        Ok(())
    }

    /// The API client section, for callers that talk to the ONVO API.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingRequired` when no client section was
    /// configured.
    pub fn require_client(&self) -> Result<&ClientConfig, ValidationError> {
        self.client
            .as_ref()
            .ok_or(ValidationError::MissingRequired("ONVO__CLIENT__API_KEY"))
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
