//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that can return predefined
//! responses or errors for testing purposes.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a successful response
    Success(Response),
    /// Return an error
    Error(HttpError),
}

/// Mock HTTP client for testing.
///
/// Responses are keyed by URL substring, so tests can match on the
/// endpoint path without spelling out the full base URL. Requests are
/// recorded for later verification.
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    /// Configured responses by URL fragment
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// Default response when no specific match
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a response for any URL containing `fragment`.
    pub fn set_response(&self, fragment: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(fragment.to_string(), response);
    }

    /// Shorthand for a JSON success response.
    pub fn set_json_response(&self, fragment: &str, status: u16, body: &str) {
        self.set_response(
            fragment,
            MockResponse::Success(Response::new(status, bytes::Bytes::from(body.to_string()))),
        );
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    /// Record a request.
    fn record_request(&self, url: &str, headers: &Headers) {
        self.requests.lock().unwrap().push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });
    }

    /// Find the configured response for a URL.
    fn find_response(&self, url: &str) -> Option<MockResponse> {
        let responses = self.responses.lock().unwrap();
        for (fragment, response) in responses.iter() {
            if url.contains(fragment.as_str()) {
                return Some(response.clone());
            }
        }
        self.default_response.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request(url, headers);

        match self.find_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "no mock response configured for {}",
                url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[tokio::test]
    async fn test_mock_returns_configured_response() {
        let client = MockHttpClient::new();
        client.set_response(
            "/folders/abc/contents",
            MockResponse::Success(Response::new(200, Bytes::from(r#"{"data":[]}"#))),
        );

        let response = client
            .get(
                "https://api.example.com/data/v1/projects/p/folders/abc/contents",
                &Headers::new(),
            )
            .await
            .unwrap();
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_mock_records_requests() {
        let client = MockHttpClient::new();
        client.set_json_response("/a", 200, "{}");

        let mut headers = Headers::new();
        headers.insert("Authorization".to_string(), "Bearer tok".to_string());
        client.get("http://x/a", &headers).await.unwrap();

        let requests = client.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "http://x/a");
        assert_eq!(
            requests[0].headers.get("Authorization"),
            Some(&"Bearer tok".to_string())
        );
    }

    #[tokio::test]
    async fn test_mock_returns_configured_error() {
        let client = MockHttpClient::new();
        client.set_response(
            "/a",
            MockResponse::Error(HttpError::Timeout("5s".to_string())),
        );

        let result = client.get("http://x/a", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_mock_unconfigured_url_errors() {
        let client = MockHttpClient::new();
        let result = client.get("http://x/nothing", &Headers::new()).await;
        assert!(matches!(result, Err(HttpError::Other(_))));
    }

    #[tokio::test]
    async fn test_mock_default_response() {
        let client = MockHttpClient::new();
        client.set_default_response(MockResponse::Success(Response::new(204, Bytes::new())));

        let response = client.get("http://x/whatever", &Headers::new()).await.unwrap();
        assert_eq!(response.status, 204);
    }
}
