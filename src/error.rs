// src/error.rs

//! Unified error handling for the status client and row assembly.

use thiserror::Error;

/// Result type alias for freespace operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed (transport error or timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Status service answered with a non-success code
    #[error("Status service at {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body was not a JSON array of status records
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Registry lookup for an unknown location id
    #[error(transparent)]
    OutOfRange(#[from] OutOfRangeError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error ends a fetch cycle (transport, status or decode failure).
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. } | Self::Json(_))
    }
}

/// A location id with no entry in the registry.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("location id {id} is outside the registry range 1..={len}")]
pub struct OutOfRangeError {
    pub id: i64,
    pub len: usize,
}
