//! Decoding response bodies into posts
//!
//! The loader treats decoding as a black box: bytes in, posts or failure out.
//! [`JsonPostsDecoder`] handles the default wire format:
//!
//! ```json
//! { "items": [ { "title": "A", "description": "B" } ] }
//! ```

use crate::error::DecodeError;
use crate::types::Post;
use serde::Deserialize;

/// Pure decode step from a response body to posts
pub trait PostsDecoder: Send + Sync {
    /// Decode `body` into posts, preserving document order
    ///
    /// # Errors
    ///
    /// Returns an error if the body is empty, malformed or of the wrong shape.
    fn decode(&self, body: &[u8]) -> Result<Vec<Post>, DecodeError>;
}

/// Decoder for the `{"items": [...]}` JSON document
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPostsDecoder;

#[derive(Deserialize)]
struct Root {
    items: Vec<RemotePost>,
}

#[derive(Deserialize)]
struct RemotePost {
    title: String,
    description: String,
}

impl From<RemotePost> for Post {
    fn from(remote: RemotePost) -> Self {
        Post::new(remote.title, remote.description)
    }
}

impl PostsDecoder for JsonPostsDecoder {
    fn decode(&self, body: &[u8]) -> Result<Vec<Post>, DecodeError> {
        let root: Root = serde_json::from_slice(body)?;
        Ok(root.items.into_iter().map(Post::from).collect())
    }
}
