//! Mock Events API server for testing

use super::test_data::{test_organization_parents, test_organizations};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Events API server
pub struct EventsApiMockServer {
    pub server: MockServer,
    pub base_url: String,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub status: u16,
    pub delay_ms: Option<u64>,
    pub body: Value,
}

impl MockResponseConfig {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            delay_ms: None,
            body,
        }
    }

    pub fn failure(status: u16, body: Value) -> Self {
        Self {
            status,
            delay_ms: None,
            body,
        }
    }

    pub fn delayed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = Some(delay_ms);
        self
    }

    fn template(&self) -> ResponseTemplate {
        let mut response = ResponseTemplate::new(self.status).set_body_json(self.body.clone());
        if let Some(delay) = self.delay_ms {
            response = response.set_delay(Duration::from_millis(delay));
        }
        response
    }
}

impl EventsApiMockServer {
    /// Start a new mock server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        Self { server, base_url }
    }

    /// Mount a GET endpoint
    pub async fn mock_get(&self, endpoint: &str, config: MockResponseConfig) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(config.template())
            .mount(&self.server)
            .await;
    }

    /// Mount a POST endpoint
    pub async fn mock_post(&self, endpoint: &str, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .respond_with(config.template())
            .mount(&self.server)
            .await;
    }

    pub async fn mock_published_events(&self, body: Value) {
        self.mock_get("/events/published", MockResponseConfig::ok(body))
            .await;
    }

    pub async fn mock_event(&self, event: Value) {
        let id = event["id"].as_str().unwrap_or_default().to_string();
        self.mock_get(&format!("/events/{}", id), MockResponseConfig::ok(event))
            .await;
    }

    pub async fn mock_filter_options(&self) {
        self.mock_get("/organizations/all", MockResponseConfig::ok(test_organizations()))
            .await;
        self.mock_get(
            "/organization-parents",
            MockResponseConfig::ok(test_organization_parents()),
        )
        .await;
    }

    /// Empty tickets and announcements for any event
    pub async fn mock_empty_event_tabs(&self) {
        self.mock_get("/tickets", MockResponseConfig::ok(json!({ "data": [] })))
            .await;
        self.mock_get("/event-announcements", MockResponseConfig::ok(json!([])))
            .await;
    }

    pub async fn mock_registration_created(&self, registration_id: &str) {
        self.mock_post(
            "/registrations",
            MockResponseConfig::ok(json!({
                "id": registration_id,
                "eventId": "event-1",
                "ticketCategoryId": "event-1-tc1",
                "isAttended": false
            })),
        )
        .await;
    }

    pub async fn mock_registration_rejected(&self, status: u16, message: Value) {
        self.mock_post(
            "/registrations",
            MockResponseConfig::failure(
                status,
                json!({ "statusCode": status, "message": message }),
            ),
        )
        .await;
    }

    /// Requests received for a method and path
    pub async fn requests_to(&self, method_name: &str, endpoint: &str) -> Vec<wiremock::Request> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|r| r.method.as_str() == method_name && r.url.path() == endpoint)
            .collect()
    }
}
