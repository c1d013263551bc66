//! Error types for the Browsr CLI

use thiserror::Error;

/// Result type alias for Browsr operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// API-related errors
///
/// Every failure the organizations API can report. Avatar fetch failures are
/// isolated per call and never affect the organization list state.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid or missing URL")]
    InvalidUrl,

    #[error("Empty or malformed response body")]
    InvalidData,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decoding(String),

    #[error("Unexpected status code: {0}")]
    Status(u16),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else if err.is_decode() {
            ApiError::Decoding(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `browsr init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Avatar cache errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Could not determine cache directory")]
    NoHome,

    #[error("Cache I/O error: {0}")]
    Io(String),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}
