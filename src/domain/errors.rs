//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Remote dashboard fetch failed. Network errors, 4xx, 5xx and undecodable
    /// bodies all share this shape; `status` is set only when a response arrived.
    #[error("Dashboard fetch failed: {reason}")]
    Fetch { status: Option<u16>, reason: String },

    #[error("Invalid month key '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Input error: {0}")]
    Input(String),
}

impl DomainError {
    /// Fetch error for a non-success HTTP status.
    pub fn http_status(status: u16) -> Self {
        DomainError::Fetch {
            status: Some(status),
            reason: format!("HTTP error! status: {}", status),
        }
    }

    /// Fetch error with no response (transport or decode failure).
    pub fn fetch(reason: impl Into<String>) -> Self {
        DomainError::Fetch {
            status: None,
            reason: reason.into(),
        }
    }
}
