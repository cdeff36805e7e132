//! Shared fixtures for the mock-server integration tests.

use elevenlabs_kit::{ElevenLabsClient, EnvView};
use mockito::{Mock, Server, ServerGuard};

pub const TEST_KEY: &str = "sk-test-123";

/// Mock ElevenLabs server plus a client pointed at it.
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn client(&self) -> ElevenLabsClient {
        ElevenLabsClient::builder()
            .api_key(TEST_KEY)
            .base_url(&self.base_url)
            .build()
            .expect("client against mock server")
    }

    /// Environment view routing cache-built clients to the mock server.
    pub fn env(&self) -> EnvView {
        EnvView::new().with_var("ELEVENLABS_BASE_URL", &self.base_url)
    }

    /// Mock a successful JSON GET, requiring the test key.
    pub async fn mock_get_json(&mut self, path: &str, body: &str) -> Mock {
        self.server
            .mock("GET", path)
            .match_header("xi-api-key", TEST_KEY)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock an error response for any method on `path`.
    pub async fn mock_error(&mut self, method: &str, path: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock(method, path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}
