//! Mock HTTP server setup for integration tests

use std::time::Duration;

use mockito::{Matcher, Mock, Server, ServerGuard};
use swiftx_rust::{ClientConfig, SwiftxClient};

use super::fixtures::{APP_KEY, APP_SECRET};

/// Path prefix of the platform API; part of every signed path.
pub const API_PREFIX: &str = "/api/v2/openapi";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = format!("{}{}", server.url(), API_PREFIX);
        Self { server, base_url }
    }

    /// Create a test client with the mock server as base URL
    pub fn client(&self) -> SwiftxClient {
        SwiftxClient::builder()
            .config(ClientConfig::new(APP_KEY, APP_SECRET).with_timeout_secs(10))
            .base_url_override(&self.base_url)
            .retries(2, Duration::from_millis(10), Duration::from_millis(20))
            .build()
            .expect("client builds")
    }

    /// A mock requiring every fixed and signing header.
    pub async fn mock_signed(
        &mut self,
        method: &str,
        endpoint: &str,
        status: usize,
        body: &str,
    ) -> Mock {
        let hex64 = Matcher::Regex("^[0-9a-f]{64}$".to_string());
        self.server
            .mock(method, format!("{API_PREFIX}{endpoint}").as_str())
            .match_query(Matcher::Any)
            .match_header("content-type", "application/json")
            .match_header("accept", "application/json")
            .match_header("x-app-key", APP_KEY)
            .match_header("user-agent", Matcher::Regex("^swiftx-rust/".to_string()))
            .match_header("x-timestamp", Matcher::Regex("^[0-9]{10}$".to_string()))
            .match_header("x-nonce", Matcher::Regex("^[0-9a-f]{32}$".to_string()))
            .match_header("x-content-sha256", hex64.clone())
            .match_header("x-signature", hex64)
            .match_header("x-request-id", Matcher::Any)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
    }
}
