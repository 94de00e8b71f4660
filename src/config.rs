//! Configuration types for posts-loader

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Loader configuration
///
/// The target URL is the only caller-visible setting. Transport settings are
/// grouped in [`TransportConfig`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Absolute http(s) URL of the posts document
    pub url: String,

    /// HTTP transport settings
    #[serde(default)]
    pub transport: TransportConfig,
}

impl LoaderConfig {
    /// Create a config for `url` with default transport settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            transport: TransportConfig::default(),
        }
    }

    /// Parse a config from JSON
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the JSON is malformed or lacks `url`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validated target URL
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the URL does not parse, is relative, or uses a
    /// scheme other than `http`/`https`.
    pub fn endpoint(&self) -> Result<Url> {
        let url = Url::parse(&self.url).map_err(|e| Error::Config {
            message: format!("invalid url '{}': {}", self.url, e),
            key: Some("url".to_string()),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::Config {
                message: format!("unsupported url scheme '{}', expected http or https", other),
                key: Some("url".to_string()),
            }),
        }
    }
}

/// HTTP transport settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Request timeout covering connect, send and body read (default: 30 seconds)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("posts-loader/{}", env!("CARGO_PKG_VERSION"))
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
