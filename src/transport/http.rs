//! reqwest-backed transport

use super::Transport;
use crate::completion::Completion;
use crate::config::TransportConfig;
use crate::error::{Error, Result, TransportError};
use crate::types::{FetchOutcome, HttpResponse};
use tokio::runtime::Handle;
use tracing::{debug, warn};
use url::Url;

/// Production [`Transport`] built on a shared `reqwest::Client`
///
/// Each request runs as its own task on the runtime that was current when the
/// transport was created, so [`Transport::get`] can be called from any thread.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    runtime: Handle,
}

impl ReqwestTransport {
    /// Create a transport from config
    ///
    /// Performs no I/O.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] when called outside a tokio runtime, or
    /// [`Error::Network`] if the HTTP client cannot be built.
    pub fn new(config: &TransportConfig) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| {
            Error::Runtime(format!("ReqwestTransport requires a tokio runtime: {}", e))
        })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self { client, runtime })
    }

    /// Create a transport around an existing client and runtime
    ///
    /// The client is used as-is. Build it with
    /// `redirect(reqwest::redirect::Policy::none())` so that 3xx statuses reach the
    /// loader instead of being followed.
    pub fn with_client(client: reqwest::Client, runtime: Handle) -> Self {
        Self { client, runtime }
    }
}

impl Transport for ReqwestTransport {
    fn get(&self, url: &Url, completion: Completion<FetchOutcome>) {
        let client = self.client.clone();
        let url = url.clone();

        self.runtime.spawn(async move {
            let outcome = fetch(&client, &url).await;
            completion.complete(outcome);
        });
    }
}

async fn fetch(client: &reqwest::Client, url: &Url) -> FetchOutcome {
    debug!(url = %url, "sending request");

    let response = client.get(url.clone()).send().await.map_err(|e| {
        warn!(
            url = %url,
            timeout = e.is_timeout(),
            connect = e.is_connect(),
            error = %e,
            "request failed"
        );
        TransportError::from(e)
    })?;

    let status = response.status().as_u16();

    // A body that cannot be read means the exchange never completed
    let body = response.bytes().await.map_err(|e| {
        warn!(url = %url, status, error = %e, "failed to read response body");
        TransportError::from(e)
    })?;

    debug!(url = %url, status, bytes = body.len(), "response received");
    Ok(HttpResponse::new(status, body.to_vec()))
}
