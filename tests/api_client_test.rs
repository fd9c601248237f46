//! HTTP-level tests for `DocsClient` against a live mock server.

use std::sync::Arc;

use accperm::adapters::ReqwestHttpClient;
use accperm::api::DocsClient;
use accperm::config::Config;
use accperm::error::ApiError;

use wiremock::matchers::{header, method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROJECT: &str = "b.8cd48a5f-70e9-4cef-abbb-56c2b35f1f47";

fn client_for(server: &MockServer) -> DocsClient {
    let config = Config::new("test-token", PROJECT, "urn:root").with_base_url(server.uri());
    DocsClient::new(Arc::new(ReqwestHttpClient::new()), &config)
}

#[tokio::test]
async fn test_fetch_contents_parses_payload_and_sends_token() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/data/v1/projects/.+/folders/.+/contents$"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "jsonapi": {"version": "1.0"},
            "data": [
                {"type": "folders", "id": "urn:adsk.wipprod:fs.folder:co.sub",
                 "attributes": {"name": "Plans"}},
                {"type": "items", "id": "urn:adsk.wipprod:dm.lineage:file",
                 "attributes": {"displayName": "model.rvt"}}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let items = client
        .fetch_folder_contents(PROJECT, "urn:adsk.wipprod:fs.folder:co.abc")
        .await
        .unwrap();

    assert_eq!(items.len(), 2);
    assert!(items[0].is_folder());
    assert_eq!(items[0].label(), "Plans");
}

#[tokio::test]
async fn test_fetch_permissions_status_error_carries_body() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "detail": "folder not found"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .fetch_folder_permissions(PROJECT, "urn:missing")
        .await
        .unwrap_err();

    match err {
        ApiError::Status { status, body } => {
            assert_eq!(status, 404);
            assert!(body.contains("folder not found"));
        }
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_permissions_accepts_bare_array() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"name": "Jane", "subjectType": "USER", "actions": ["VIEW"]}
        ])))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let records = client
        .fetch_folder_permissions(PROJECT, "urn:folder")
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].actions, vec!["VIEW"]);
}

#[tokio::test]
async fn test_non_json_body_is_malformed_response() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy error</html>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client
        .fetch_folder_contents(PROJECT, "urn:folder")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MalformedResponse { .. }));
}
