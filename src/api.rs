//! Typed client for the Data Management and BIM 360 Docs endpoints.
//!
//! One GET per operation, bearer-token authenticated, no retries. A
//! non-2xx status comes back as [`ApiError::Status`] so callers can
//! distinguish "folder has no children" from "fetch failed" and decide
//! whether to record or swallow the failure.

use std::sync::Arc;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::{ContentsEnvelope, PermissionRecord, PermissionsPayload, RawItem};
use crate::traits::{Headers, HttpClient, HttpError};

/// Client for folder-tree and permission lookups.
#[derive(Clone)]
pub struct DocsClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    access_token: String,
}

impl DocsClient {
    /// Create a client from a transport and the process configuration.
    pub fn new(http: Arc<dyn HttpClient>, config: &Config) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
        }
    }

    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert(
            "Authorization".to_string(),
            format!("Bearer {}", self.access_token),
        );
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    fn contents_url(&self, project_id: &str, folder_id: &str) -> String {
        format!(
            "{}/data/v1/projects/{}/folders/{}/contents",
            self.base_url,
            urlencoding::encode(project_id),
            urlencoding::encode(folder_id)
        )
    }

    fn permissions_url(&self, project_id: &str, folder_id: &str) -> String {
        format!(
            "{}/bim360/docs/v1/projects/{}/folders/{}/permissions",
            self.base_url,
            urlencoding::encode(project_id),
            urlencoding::encode(folder_id)
        )
    }

    /// Fetch the immediate children (files and folders) of one folder.
    pub async fn fetch_folder_contents(
        &self,
        project_id: &str,
        folder_id: &str,
    ) -> Result<Vec<RawItem>, ApiError> {
        check_ids(project_id, folder_id)?;

        let url = self.contents_url(project_id, folder_id);
        let response = self.http.get(&url, &self.headers()).await?;

        if !response.is_success() {
            let err = ApiError::from_status(response.status, response.text_lossy());
            tracing::warn!(folder = folder_id, %err, "folder contents fetch failed");
            return Err(err);
        }

        let envelope: ContentsEnvelope =
            response.json().map_err(|e| ApiError::MalformedResponse {
                context: format!("folder contents for {}: {}", folder_id, e),
            })?;
        Ok(envelope.data)
    }

    /// Fetch the permission records attached to one folder.
    pub async fn fetch_folder_permissions(
        &self,
        project_id: &str,
        folder_id: &str,
    ) -> Result<Vec<PermissionRecord>, ApiError> {
        check_ids(project_id, folder_id)?;

        let url = self.permissions_url(project_id, folder_id);
        let response = self.http.get(&url, &self.headers()).await?;

        if !response.is_success() {
            let err = ApiError::from_status(response.status, response.text_lossy());
            tracing::warn!(folder = folder_id, %err, "folder permissions fetch failed");
            return Err(err);
        }

        let payload: PermissionsPayload =
            response.json().map_err(|e| ApiError::MalformedResponse {
                context: format!("folder permissions for {}: {}", folder_id, e),
            })?;
        Ok(payload.into_records())
    }
}

fn check_ids(project_id: &str, folder_id: &str) -> Result<(), ApiError> {
    if project_id.is_empty() || folder_id.is_empty() {
        return Err(ApiError::Transport(HttpError::InvalidUrl(
            "project and folder identifiers must be non-empty".to_string(),
        )));
    }
    Ok(())
}
