//! Remote posts loader
//!
//! [`RemoteLoader`] issues one transport request per [`PostsLoader::load`] call and
//! classifies the outcome into a [`LoadResult`]:
//!
//! ```text
//! Idle -> AwaitingTransport -> Classifying -> Delivered(Ok | Connectivity | InvalidData)
//! ```
//!
//! The loader does no I/O of its own, holds no per-request state and never retries.
//! All concurrency belongs to the injected [`Transport`].

mod classify;

use crate::completion::Completion;
use crate::config::LoaderConfig;
use crate::decoder::{JsonPostsDecoder, PostsDecoder};
use crate::error::Result;
use crate::transport::{ReqwestTransport, Transport};
use crate::types::{FetchOutcome, LoadResult};
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::debug;
use url::Url;

/// Handler that receives the result of one load
pub type LoadCompletion = Box<dyn FnOnce(LoadResult) + Send + 'static>;

/// Caller-facing capability to load posts
///
/// The completion fires at most once per call, possibly on another thread and in
/// any order relative to other calls. Nothing is returned synchronously.
pub trait PostsLoader: Send + Sync {
    /// Start loading and report the result through `completion`
    fn load(&self, completion: LoadCompletion);
}

/// [`PostsLoader`] that fetches posts from a fixed URL through a [`Transport`]
///
/// # Examples
///
/// ```no_run
/// use posts_loader::{LoaderConfig, RemoteLoader};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let loader = RemoteLoader::from_config(&LoaderConfig::new("https://example.com/posts"))?;
///
/// match loader.load_async().await {
///     Ok(posts) => println!("loaded {} posts", posts.len()),
///     Err(kind) => println!("load failed: {kind}"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct RemoteLoader {
    url: Url,
    transport: Arc<dyn Transport>,
    decoder: Arc<dyn PostsDecoder>,
}

impl RemoteLoader {
    /// Create a loader for `url` using the default JSON decoder
    ///
    /// Construction performs no I/O.
    pub fn new(url: Url, transport: Arc<dyn Transport>) -> Self {
        Self {
            url,
            transport,
            decoder: Arc::new(JsonPostsDecoder),
        }
    }

    /// Build a loader backed by [`ReqwestTransport`]
    ///
    /// Must be called from within a tokio runtime. Performs no I/O.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, no runtime is available, or the
    /// HTTP client cannot be built.
    pub fn from_config(config: &LoaderConfig) -> Result<Self> {
        let url = config.endpoint()?;
        let transport = ReqwestTransport::new(&config.transport)?;
        Ok(Self::new(url, Arc::new(transport)))
    }

    /// Replace the decoder
    pub fn with_decoder(mut self, decoder: Arc<dyn PostsDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    /// URL every load is sent to
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Load and await the result
    ///
    /// If the transport abandons the request without reporting an outcome, the
    /// returned future never resolves, the same as the callback form never firing.
    /// Wrap it in `tokio::time::timeout` if bounded latency matters.
    pub async fn load_async(&self) -> LoadResult {
        let (tx, rx) = oneshot::channel();
        self.load(Box::new(move |result: LoadResult| {
            let _ = tx.send(result);
        }));

        match rx.await {
            Ok(result) => result,
            Err(_) => std::future::pending().await,
        }
    }
}

impl PostsLoader for RemoteLoader {
    fn load(&self, completion: LoadCompletion) {
        debug!(url = %self.url, "loading posts");

        // Captures only the decoder and the caller's handler, never the loader
        let decoder = Arc::clone(&self.decoder);
        let on_outcome = Completion::new(move |outcome: FetchOutcome| {
            completion(classify::classify(outcome, decoder.as_ref()));
        });

        self.transport.get(&self.url, on_outcome);
    }
}

impl std::fmt::Debug for RemoteLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteLoader")
            .field("url", &self.url.as_str())
            .finish_non_exhaustive()
    }
}
