//! Mock HTTP server helpers

use posts_loader::{LoaderConfig, RemoteLoader};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the loader is pointed at in every test
pub const POSTS_PATH: &str = "/posts";

/// Start a mock server that answers `GET /posts` with `status` and `body`
///
/// The mock expects exactly `expected_calls` hits; wiremock verifies this when
/// the server is dropped.
pub async fn serve_posts(status: u16, body: &str, expected_calls: u64) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(POSTS_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .expect(expected_calls)
        .mount(&mock_server)
        .await;

    mock_server
}

/// Loader config pointing at `POSTS_PATH` on the mock server, with a short timeout
pub fn config_for(mock_server: &MockServer) -> LoaderConfig {
    let mut config = LoaderConfig::new(format!("{}{}", mock_server.uri(), POSTS_PATH));
    config.transport.timeout = Duration::from_secs(5);
    config
}

/// Build a reqwest-backed loader pointing at the mock server
pub fn loader_for(mock_server: &MockServer) -> RemoteLoader {
    RemoteLoader::from_config(&config_for(mock_server)).expect("failed to build loader")
}

/// Loader config for a local port with nothing listening on it
pub fn unreachable_config() -> LoaderConfig {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to bind");
    let port = listener.local_addr().expect("no local addr").port();
    drop(listener);

    let mut config = LoaderConfig::new(format!("http://127.0.0.1:{port}{POSTS_PATH}"));
    config.transport.timeout = Duration::from_secs(5);
    config
}
