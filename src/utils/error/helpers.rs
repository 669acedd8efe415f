//! Helper functions for creating specific error types

use super::types::AccessError;

impl AccessError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Whether this error belongs to the "save failed" outcome class
    ///
    /// Covers rejections by the backend and transport failures; the caller
    /// keeps its toggle map so the save can be retried.
    pub fn is_save_failure(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::HttpClient(_))
    }

    /// HTTP status carried by the error, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::HttpClient(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
