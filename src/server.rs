//! JSON HTTP backend.
//!
//! Proxies folder and permission lookups for a frontend, mirroring the
//! remote API behind three routes. Missing required query parameters are
//! rejected with 400 before any outbound call; upstream failures map to
//! 500 with a JSON error body.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};

use crate::api::DocsClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::RawItem;
use crate::traits::HttpClient;

/// Shared state for the backend routes.
#[derive(Clone)]
pub struct AppState {
    client: DocsClient,
    project_id: String,
    root_folder_urn: String,
}

impl AppState {
    /// Build the state from a transport and the process configuration.
    pub fn new(http: Arc<dyn HttpClient>, config: &Config) -> Self {
        Self {
            client: DocsClient::new(http, config),
            project_id: config.project_id.clone(),
            root_folder_urn: config.root_folder_urn.clone(),
        }
    }
}

/// A folder reference as the frontend consumes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FolderSummary {
    pub name: String,
    pub urn: String,
}

#[derive(Deserialize)]
struct SubfoldersParams {
    urn: Option<String>,
}

#[derive(Deserialize)]
struct PermissionsParams {
    urn: Option<String>,
    project_id: Option<String>,
}

/// Build the backend router.
pub fn router(state: AppState) -> Router {
    // The frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/folders", get(folders_handler))
        .route("/api/subfolders", get(subfolders_handler))
        .route("/api/permissions", get(permissions_handler))
        .layer(cors)
        .with_state(state)
}

/// Start the backend on the given address.
///
/// Returns the server task handle and the actual bound address, so tests
/// can bind port 0.
pub async fn serve_on(
    addr: SocketAddr,
    state: AppState,
) -> color_eyre::Result<(JoinHandle<()>, SocketAddr)> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    tracing::info!("backend listening on http://{}", actual_addr);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("backend server error: {}", e);
        }
    });

    Ok((handle, actual_addr))
}

fn folder_summaries(items: Vec<RawItem>) -> Vec<FolderSummary> {
    items
        .into_iter()
        .filter(|item| item.is_folder())
        .map(|item| FolderSummary {
            name: item.label().to_string(),
            urn: item.id,
        })
        .collect()
}

fn missing_param(name: &str) -> axum::response::Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": format!("No {} provided", name) })),
    )
        .into_response()
}

fn upstream_error(err: ApiError) -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": err.to_string() })),
    )
        .into_response()
}

/// `GET /api/folders` — immediate subfolders of the configured root.
async fn folders_handler(State(state): State<AppState>) -> axum::response::Response {
    match state
        .client
        .fetch_folder_contents(&state.project_id, &state.root_folder_urn)
        .await
    {
        Ok(items) => Json(folder_summaries(items)).into_response(),
        Err(err) => upstream_error(err),
    }
}

/// `GET /api/subfolders?urn=<id>` — immediate subfolders of one folder.
async fn subfolders_handler(
    State(state): State<AppState>,
    Query(params): Query<SubfoldersParams>,
) -> axum::response::Response {
    let Some(urn) = params.urn.filter(|u| !u.is_empty()) else {
        return missing_param("URN");
    };

    match state.client.fetch_folder_contents(&state.project_id, &urn).await {
        Ok(items) => Json(folder_summaries(items)).into_response(),
        Err(err) => upstream_error(err),
    }
}

/// `GET /api/permissions?urn=<id>[&project_id=<id>]` — permission list of
/// one folder; the project defaults to the configured one.
async fn permissions_handler(
    State(state): State<AppState>,
    Query(params): Query<PermissionsParams>,
) -> axum::response::Response {
    let Some(urn) = params.urn.filter(|u| !u.is_empty()) else {
        return missing_param("URN");
    };
    let project_id = params
        .project_id
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| state.project_id.clone());

    match state.client.fetch_folder_permissions(&project_id, &urn).await {
        Ok(records) => Json(records).into_response(),
        Err(err) => upstream_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemAttributes;

    #[test]
    fn test_folder_summaries_filters_files() {
        let items = vec![
            RawItem {
                id: "urn:f".to_string(),
                kind: "folders".to_string(),
                attributes: ItemAttributes {
                    name: "Plans".to_string(),
                    display_name: None,
                },
            },
            RawItem {
                id: "urn:i".to_string(),
                kind: "items".to_string(),
                attributes: ItemAttributes {
                    name: String::new(),
                    display_name: Some("model.rvt".to_string()),
                },
            },
        ];
        let summaries = folder_summaries(items);
        assert_eq!(
            summaries,
            vec![FolderSummary {
                name: "Plans".to_string(),
                urn: "urn:f".to_string()
            }]
        );
    }
}
