//! Core types shared by the loader, transports and decoders

use crate::error::{LoadError, TransportError};
use serde::{Deserialize, Serialize};

/// A decoded post delivered to callers on a successful load
///
/// Immutable once constructed. The loader places no constraints on the fields;
/// validating them is the decoder's concern.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Post {
    title: String,
    description: String,
}

impl Post {
    /// Create a post
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Post title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Post description
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Completed HTTP exchange as reported by a transport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// Raw response body
    pub body: Vec<u8>,
    /// HTTP status code
    pub status: u16,
}

impl HttpResponse {
    /// Create a response from a status code and body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            body: body.into(),
            status,
        }
    }
}

/// What a transport reports for a single request
pub type FetchOutcome = std::result::Result<HttpResponse, TransportError>;

/// What a loader reports for a single `load` call
pub type LoadResult = std::result::Result<Vec<Post>, LoadError>;
