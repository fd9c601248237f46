//! Common test utilities for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use accperm::adapters::MockHttpClient;
use accperm::api::DocsClient;
use accperm::config::Config;

/// Project id used across tests.
pub const PROJECT: &str = "b.8cd48a5f-70e9-4cef-abbb-56c2b35f1f47";

/// Root folder URN used across tests.
pub const ROOT: &str = "urn:adsk.wipprod:fs.folder:co.root";

/// Test configuration pointing at a fake base URL.
pub fn test_config() -> Config {
    Config::new("test-token", PROJECT, ROOT).with_base_url("http://api.test")
}

/// A `DocsClient` backed by the given mock transport.
pub fn docs_client(mock: &MockHttpClient) -> DocsClient {
    DocsClient::new(Arc::new(mock.clone()), &test_config())
}

/// JSON for one folder child in a `contents` payload.
pub fn folder_item(urn: &str, name: &str) -> String {
    format!(
        r#"{{"type": "folders", "id": "{}", "attributes": {{"name": "{}"}}}}"#,
        urn, name
    )
}

/// JSON for one file child in a `contents` payload.
pub fn file_item(urn: &str, display_name: &str) -> String {
    format!(
        r#"{{"type": "items", "id": "{}", "attributes": {{"displayName": "{}"}}}}"#,
        urn, display_name
    )
}

/// JSON for a whole `contents` envelope.
pub fn contents(items: &[String]) -> String {
    format!(r#"{{"data": [{}]}}"#, items.join(", "))
}

/// Mock-response URL fragment for a folder's contents endpoint.
pub fn contents_fragment(urn: &str) -> String {
    format!("folders/{}/contents", urlencoding::encode(urn))
}

/// Mock-response URL fragment for a folder's permissions endpoint.
pub fn permissions_fragment(urn: &str) -> String {
    format!("folders/{}/permissions", urlencoding::encode(urn))
}
