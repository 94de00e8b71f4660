//! Error types for posts-loader
//!
//! Two layers of errors live here:
//! - The closed domain taxonomy delivered to `load` callers ([`LoadError`])
//! - Boundary and construction errors ([`TransportError`], [`DecodeError`], [`Error`])
//!
//! Only [`LoadError`] ever reaches a load completion. The others are either folded
//! into it by the loader or returned from constructors and config parsing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for posts-loader construction and configuration
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by [`TransportError`]
type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for posts-loader
///
/// Returned when building a loader or transport, never from a load itself.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "url")
        key: Option<String>,
    },

    /// HTTP client could not be built
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// No async runtime available to drive requests
    #[error("runtime error: {0}")]
    Runtime(String),
}

/// Domain failure delivered to a load completion
///
/// The set is closed. Callers match on the variant, never on the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadError {
    /// The exchange with the remote endpoint did not complete
    #[error("connectivity error: could not reach the remote resource")]
    Connectivity,

    /// The exchange completed but the response cannot be used
    #[error("invalid data: unexpected status code or undecodable body")]
    InvalidData,
}

impl LoadError {
    /// Stable machine-readable name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadError::Connectivity => "connectivity",
            LoadError::InvalidData => "invalid_data",
        }
    }
}

/// Opaque failure reported by a transport
///
/// DNS, connect, TLS, timeout and cancellation failures all collapse into this one
/// type. The loader never looks inside it.
#[derive(Debug, Error)]
#[error("transport error: {message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl TransportError {
    /// Create a transport error from a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a transport error that wraps an underlying cause
    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Human-readable description of the failure
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            "request timed out".to_string()
        } else if e.is_connect() {
            "connection failed".to_string()
        } else {
            e.to_string()
        };
        Self::with_source(message, e)
    }
}

/// Failure to decode a response body into posts
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Body is not a valid posts document
    #[error("malformed posts payload: {0}")]
    Json(#[from] serde_json::Error),
}
