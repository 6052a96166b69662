//! Error types for the admin console
//!
//! Every failure is contained to the flow that triggered it. The views never
//! show these messages directly: each flow maps any error to its own fixed
//! user-facing text and logs the underlying cause.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Failures talking to the admin API or reading a selected file
///
/// Cloneable so results can travel inside UI messages.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(Arc<reqwest::Error>),

    #[error("server responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("malformed response: {0}")]
    Decode(Arc<serde_json::Error>),

    #[error("unusable project record: {0}")]
    InvalidRecord(String),

    #[error("failed to read file: {0}")]
    Io(Arc<std::io::Error>),

    #[error("{0} is not an image")]
    NotAnImage(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Network(Arc::new(e))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(Arc::new(e))
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        ApiError::Io(Arc::new(e))
    }
}

/// Failures while loading the configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid API base URL {0:?}")]
    InvalidUrl(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
