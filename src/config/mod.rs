//! Configuration management
//!
//! Configuration is read from a YAML file or from the environment and
//! validated before use.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Editing-surface settings
    #[serde(default)]
    pub access: AccessConfig,
    /// Access-rights backend connection
    #[serde(default)]
    pub client: ClientConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AccessError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml_str(&content)?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate configuration from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| AccessError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is honoured.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        config.client.base_url = lookup(ENV_API_BASE_URL)
            .ok_or_else(|| AccessError::Config(format!("{} is not set", ENV_API_BASE_URL)))?;

        if let Some(modules) = lookup(ENV_VIEW_ONLY_MODULES) {
            config.access.view_only_modules = modules
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(String::from)
                .collect();
        }

        if let Some(timeout) = lookup(ENV_REQUEST_TIMEOUT_SECS) {
            config.client.timeout_secs = timeout.trim().parse().map_err(|e| {
                AccessError::Config(format!("Invalid {}: {}", ENV_REQUEST_TIMEOUT_SECS, e))
            })?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            config.logging.level = level.trim().to_lowercase();
        }

        if let Some(json) = lookup(ENV_LOG_JSON) {
            config.logging.json = matches!(json.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.access.validate()?;
        self.client.validate()?;
        self.logging.validate()?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Base URL of the access-rights API
pub const ENV_API_BASE_URL: &str = "ACCESS_API_BASE_URL";
/// Comma-separated view-only module names
pub const ENV_VIEW_ONLY_MODULES: &str = "ACCESS_VIEW_ONLY_MODULES";
/// Request timeout in seconds
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "ACCESS_REQUEST_TIMEOUT_SECS";
/// Log level
pub const ENV_LOG_LEVEL: &str = "ACCESS_LOG_LEVEL";
/// JSON log output
pub const ENV_LOG_JSON: &str = "ACCESS_LOG_JSON";
