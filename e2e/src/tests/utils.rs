use std::sync::Once;

use fictioneers::{Fictioneers, FictioneersHttpClient};
use httpmock::MockServer;

static TRACING_INIT: Once = Once::new();

/// Initializes the tracing subscriber for tests.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(std::env::var("TRACING").unwrap_or_else(|_| "info".to_string()))
            // Use with_test_writer to ensure logs are captured correctly by the test runner.
            .with_test_writer()
            .init();
    });
}

/// A transport pointed at the mock server's `/v1`.
pub fn mock_client(server: &MockServer) -> FictioneersHttpClient {
    FictioneersHttpClient::builder()
        .base_url(server.base_url())
        .build()
        .unwrap()
}

/// A session for `api_key` on the mock server, acting as `user_id`.
pub fn session(server: &MockServer, api_key: &str, user_id: &str) -> Fictioneers {
    init_tracing();
    Fictioneers::builder(api_key)
        .user_id(user_id)
        .client(mock_client(server))
        .build()
        .unwrap()
}
