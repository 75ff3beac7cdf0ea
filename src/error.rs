// src/error.rs

//! Unified error handling for the portfolio engine.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for portfolio operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// URL parsing failed
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// Source answered with a non-success status
    #[error("Status {status} from {location}")]
    Status { location: String, status: u16 },

    /// Every candidate content source failed
    #[error("Content unavailable: all {attempted} source(s) failed")]
    Unavailable { attempted: usize },

    /// A file handed to the extraction tool could not be read
    #[error("Failed to read \"{}\": {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

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

    /// Create a non-success status error for a source location.
    pub fn status(location: impl Into<String>, status: u16) -> Self {
        Self::Status {
            location: location.into(),
            status,
        }
    }

    /// True when this error means no content could be loaded at all.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
