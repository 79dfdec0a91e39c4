use thiserror::Error;
use std::path::PathBuf;

/// Result type alias for key-scan operations
pub type Result<T> = std::result::Result<T, ScanError>;

/// Error types for scan operations.
///
/// Per-target probe failures never show up here: the prober folds them
/// into [`crate::types::Outcome::OtherError`] so a scan always runs to the end.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("API catalog unavailable: {message}")]
    CatalogUnavailable { message: String },

    #[error("Invalid endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },
}

impl ScanError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new catalog unavailable error
    pub fn catalog_unavailable<S: Into<String>>(message: S) -> Self {
        Self::CatalogUnavailable {
            message: message.into(),
        }
    }

    /// Create a new invalid endpoint error
    pub fn invalid_endpoint<S: Into<String>>(endpoint: S, message: S) -> Self {
        Self::InvalidEndpoint {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }
}
