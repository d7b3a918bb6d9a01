//! Mock analysis backend over wiremock.

use std::time::Duration;

use serde_json::Value;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Wrapper around a wiremock server with mount helpers for the three
/// backend endpoints. Call expectations are verified when the server is
/// dropped.
pub struct MockBackend {
    server: MockServer,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    pub fn server(&self) -> &MockServer {
        &self.server
    }

    /// `POST /analyze-pdf` returning a successful analysis.
    pub async fn mount_analyze(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path("/analyze-pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// `POST /analyze-pdf` that succeeds after a delay, and asserts it is
    /// hit exactly `expected_calls` times.
    pub async fn mount_analyze_slow(&self, body: Value, delay: Duration, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/analyze-pdf"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(body)
                    .set_delay(delay),
            )
            .expect(expected_calls)
            .mount(&self.server)
            .await;
    }

    /// `POST /analyze-pdf` failing with the given status.
    pub async fn mount_analyze_failure(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/analyze-pdf"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// `GET /analytics/sessions` returning the given envelope.
    pub async fn mount_sessions(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path("/analytics/sessions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_sessions_failure(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/analytics/sessions"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// `GET /analytics/summary` returning the given summary.
    pub async fn mount_summary(&self, body: Value) {
        Mock::given(method("GET"))
            .and(path("/analytics/summary"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    pub async fn mount_summary_failure(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/analytics/summary"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }
}
