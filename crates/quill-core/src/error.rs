use core::result::Result as CoreResult;
use std::io::Error as IoError;

use reqwest::Error as ReqwestError;
use serde_json::Error as SerdeJsonError;
use thiserror::Error;
use toml::de::Error as TomlError;

/// Result type for core operations.
pub type Result<T> = CoreResult<T, Error>;

/// Errors that can occur in the assistant pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] IoError),

    /// The request could not be sent or the response could not be received.
    #[error("network error: {0}")]
    Network(#[from] ReqwestError),

    /// The completion endpoint answered with a non-success status.
    #[error("completion API error {status}: {message}")]
    Transport {
        /// HTTP status code returned by the endpoint.
        status: u16,
        /// Status text or error body returned alongside the status.
        message: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] SerdeJsonError),

    /// TOML deserialization failed.
    #[error("TOML deserialization error: {0}")]
    Toml(#[from] TomlError),

    /// Configuration is invalid or missing.
    #[error("configuration error: {0}")]
    Config(String),

    /// Required API key was not found.
    #[error("API key not found: {0}")]
    MissingApiKey(String),

    /// The completion endpoint returned a payload we could not use.
    #[error("invalid response from provider: {0}")]
    InvalidResponse(String),

    /// The submitted turn was rejected before reaching the pipeline.
    #[error("turn rejected: {0}")]
    TurnRejected(String),

    /// A general error not covered by other variants.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Determines whether this error may succeed if retried.
    ///
    /// Returns `true` for transient failures: network errors and non-2xx
    /// responses from the completion endpoint.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_) | Self::Transport { .. })
    }
}
