//! Recording transport for tests

use super::Transport;
use crate::completion::Completion;
use crate::error::TransportError;
use crate::types::{FetchOutcome, HttpResponse};
use std::sync::{Mutex, MutexGuard};
use url::Url;

/// [`Transport`] that records every request and never completes on its own
///
/// Tests drive completion explicitly with [`SpyTransport::complete_with_error`]
/// and [`SpyTransport::complete_with_status`], addressing requests by the order in
/// which they were issued. Completing the same request twice is allowed; it
/// exercises the at-most-once guarantee downstream.
///
/// # Examples
///
/// ```
/// use posts_loader::{LoadResult, PostsLoader, RemoteLoader, SpyTransport};
/// use std::sync::Arc;
/// use url::Url;
///
/// let spy = Arc::new(SpyTransport::default());
/// let loader = RemoteLoader::new(Url::parse("http://a-url.com").unwrap(), spy.clone());
///
/// loader.load(Box::new(|result: LoadResult| assert!(result.is_ok())));
/// assert_eq!(spy.request_count(), 1);
///
/// spy.complete_with_status(200, r#"{"items": []}"#, 0);
/// ```
#[derive(Debug, Default)]
pub struct SpyTransport {
    messages: Mutex<Vec<(Url, Completion<FetchOutcome>)>>,
}

impl SpyTransport {
    /// Create an empty spy
    pub fn new() -> Self {
        Self::default()
    }

    /// URLs requested so far, in call order
    pub fn requested_urls(&self) -> Vec<Url> {
        self.messages().iter().map(|(url, _)| url.clone()).collect()
    }

    /// Number of requests issued so far
    pub fn request_count(&self) -> usize {
        self.messages().len()
    }

    /// Complete request `index` with a transport error
    ///
    /// Returns `false` if there is no such request or it was already completed.
    pub fn complete_with_error(&self, error: TransportError, index: usize) -> bool {
        self.complete(Err(error), index)
    }

    /// Complete request `index` with a response
    ///
    /// Returns `false` if there is no such request or it was already completed.
    pub fn complete_with_status(
        &self,
        status: u16,
        body: impl Into<Vec<u8>>,
        index: usize,
    ) -> bool {
        self.complete(Ok(HttpResponse::new(status, body)), index)
    }

    fn complete(&self, outcome: FetchOutcome, index: usize) -> bool {
        // Release the lock before firing so handlers may issue new requests
        let completion = self.messages().get(index).map(|(_, c)| c.clone());

        match completion {
            Some(completion) => completion.complete(outcome),
            None => false,
        }
    }

    fn messages(&self) -> MutexGuard<'_, Vec<(Url, Completion<FetchOutcome>)>> {
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Transport for SpyTransport {
    fn get(&self, url: &Url, completion: Completion<FetchOutcome>) {
        self.messages().push((url.clone(), completion));
    }
}
