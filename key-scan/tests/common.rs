//! Shared fixtures for key-scan integration tests

use key_scan::ScanConfig;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_KEY: &str = "AIzaIntegrationKey1234";
pub const DISCOVERY_PATH: &str = "/discovery/v1/apis";

/// Config pointing at the mock server's catalog, with no throttle delay
pub fn create_test_config(server: &MockServer) -> ScanConfig {
    ScanConfig::builder()
        .discovery_url(format!("{}{}", server.uri(), DISCOVERY_PATH))
        .timeout(2)
        .delay_ms(0)
        .build()
        .expect("valid test config")
}

/// Catalog item whose base URL lives on the mock server
pub fn catalog_item(server: &MockServer, title: &str, route: &str) -> Value {
    json!({
        "kind": "discovery#directoryItem",
        "title": title,
        "baseUrl": format!("{}{}", server.uri(), route),
    })
}

pub async fn mount_catalog(server: &MockServer, items: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(DISCOVERY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "kind": "discovery#directoryList",
            "items": items,
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Google style error body
pub fn google_error(status: u16, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "error": {
            "code": status,
            "message": message,
            "errors": [{ "message": message, "domain": "global", "reason": "badRequest" }],
        }
    }))
}

/// Mount a probe endpoint that must be hit exactly once with the test key
pub async fn mount_probe(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .and(query_param("key", TEST_KEY))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
