//! HTTP transport boundary
//!
//! A [`Transport`] performs one outbound GET per call and reports a single
//! [`FetchOutcome`] through the supplied [`Completion`]. The loader depends only on
//! this trait, so production and test implementations are interchangeable:
//!
//! - [`ReqwestTransport`]: real HTTP on the tokio runtime
//! - [`SpyTransport`]: records requests and lets tests complete them by hand

mod http;
mod spy;

pub use http::ReqwestTransport;
pub use spy::SpyTransport;

use crate::completion::Completion;
use crate::types::FetchOutcome;
use url::Url;

/// Capability to fetch bytes and a status code for a URL
///
/// Implementations must deliver exactly one outcome per call, on any thread and
/// in any order relative to other calls. Every failure to complete the exchange
/// (DNS, connect, TLS, timeout, cancellation) is reported as a
/// [`TransportError`](crate::error::TransportError). Non-2xx responses are not
/// failures at this layer.
pub trait Transport: Send + Sync {
    /// Start a GET request for `url` and report its outcome through `completion`
    fn get(&self, url: &Url, completion: Completion<FetchOutcome>);
}
