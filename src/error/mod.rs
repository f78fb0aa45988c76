//! Error types for Deskhand.

use thiserror::Error;

/// Primary error type for all Deskhand operations.
#[derive(Error, Debug)]
pub enum DeskhandError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DeskhandError {
    /// Create an API error from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error naming a missing environment variable.
    pub fn missing_env(var: &str) -> Self {
        Self::Configuration(format!("{var} environment variable not set"))
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, DeskhandError>;
