//! # posts-loader
//!
//! Loads a list of posts from a remote URL and reports one of exactly three
//! outcomes to the caller:
//!
//! - `Ok(posts)`: the server answered 200 with a decodable body
//! - `Err(LoadError::Connectivity)`: the HTTP exchange itself failed
//! - `Err(LoadError::InvalidData)`: any other status, or a body that does not decode
//!
//! The network layer sits behind the [`Transport`] trait and the body format
//! behind [`PostsDecoder`], so both can be replaced. [`SpyTransport`] is a
//! ready-made test double.
//!
//! ## Quick Start
//!
//! ```no_run
//! use posts_loader::{LoadResult, LoaderConfig, PostsLoader, RemoteLoader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LoaderConfig::new("https://example.com/posts");
//!     let loader = RemoteLoader::from_config(&config)?;
//!
//!     // Callback style
//!     loader.load(Box::new(|result: LoadResult| match result {
//!         Ok(posts) => println!("{} posts", posts.len()),
//!         Err(kind) => eprintln!("load failed: {kind}"),
//!     }));
//!
//!     // Future style
//!     let posts = loader.load_async().await?;
//!     for post in &posts {
//!         println!("{}: {}", post.title(), post.description());
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// One-shot completion latch
pub mod completion;
/// Configuration types
pub mod config;
/// Response body decoding
pub mod decoder;
/// Error types
pub mod error;
/// Remote loader and result classification
pub mod loader;
/// HTTP transport boundary and implementations
pub mod transport;
/// Core types
pub mod types;

// Re-export commonly used types
pub use completion::Completion;
pub use config::{LoaderConfig, TransportConfig};
pub use decoder::{JsonPostsDecoder, PostsDecoder};
pub use error::{DecodeError, Error, LoadError, Result, TransportError};
pub use loader::{LoadCompletion, PostsLoader, RemoteLoader};
pub use transport::{ReqwestTransport, SpyTransport, Transport};
pub use types::{FetchOutcome, HttpResponse, LoadResult, Post};
