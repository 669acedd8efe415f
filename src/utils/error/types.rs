//! Error types for access-rights operations

use thiserror::Error;

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, AccessError>;

/// Main error type for the crate
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Non-success response from the access-rights backend
    #[error("Access rights API returned {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
}
