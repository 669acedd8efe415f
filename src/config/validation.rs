//! Configuration validation

use super::models::*;
use crate::utils::error::{AccessError, Result};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// Accepted log levels
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Upper bound for the request timeout in seconds
const MAX_TIMEOUT_SECS: u64 = 300;

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for AccessConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating access configuration");

        let mut seen = HashSet::new();
        for module in &self.view_only_modules {
            if module.trim().is_empty() {
                return Err(AccessError::Config(
                    "View-only module names cannot be empty".to_string(),
                ));
            }
            if !seen.insert(module) {
                return Err(AccessError::Config(format!(
                    "Duplicate view-only module: {}",
                    module
                )));
            }
        }

        Ok(())
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        debug!("Validating client configuration");

        let url = Url::parse(&self.base_url).map_err(|e| {
            AccessError::Config(format!("Invalid API base URL '{}': {}", self.base_url, e))
        })?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AccessError::Config(format!(
                    "API base URL must use http:// or https:// scheme, got: {}",
                    scheme
                )));
            }
        }

        if url.cannot_be_a_base() {
            return Err(AccessError::Config(format!(
                "API base URL cannot be used as a base: {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AccessError::Config(
                "Request timeout must be greater than 0".to_string(),
            ));
        }

        if self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(AccessError::Config(format!(
                "Request timeout should not exceed {} seconds",
                MAX_TIMEOUT_SECS
            )));
        }

        if self.user_agent.is_empty() {
            return Err(AccessError::Config("User agent cannot be empty".to_string()));
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.level.as_str()) {
            return Err(AccessError::Config(format!(
                "Invalid log level '{}', expected one of: {}",
                self.level,
                LOG_LEVELS.join(", ")
            )));
        }
        Ok(())
    }
}
