//! Folder-tree enumeration.
//!
//! Walks the folder hierarchy below a root URN and flattens it into a
//! pre-order list of [`FolderEntry`] values: a parent appears strictly
//! before every folder in its subtree, siblings keep the order the remote
//! API returned them in. The walk is an explicit work-stack loop rather
//! than language recursion, so hierarchy depth cannot overflow the call
//! stack, and a visited-URN set rejects cycles even though the remote
//! contract claims the graph is acyclic.

use std::collections::HashSet;

use crate::api::DocsClient;
use crate::error::ApiError;
use crate::models::FolderEntry;

/// A per-folder contents fetch that failed during traversal.
///
/// The folder stays in the result with zero children; this record is what
/// lets reports distinguish "empty" from "unreadable".
#[derive(Debug, Clone)]
pub struct FetchFailure {
    pub folder_urn: String,
    pub path: String,
    /// HTTP status, when the failure was a status-level one
    pub status: Option<u16>,
    pub detail: String,
}

impl FetchFailure {
    fn new(entry_urn: &str, path: &str, err: &ApiError) -> Self {
        Self {
            folder_urn: entry_urn.to_string(),
            path: path.to_string(),
            status: err.status(),
            detail: err.to_string(),
        }
    }
}

/// Result of one traversal: discovered folders in pre-order, plus the
/// fetch failures encountered along the way.
#[derive(Debug, Clone, Default)]
pub struct Traversal {
    pub folders: Vec<FolderEntry>,
    pub failures: Vec<FetchFailure>,
}

/// Enumerate every folder below `root_urn`, depth-first, pre-order.
///
/// The root folder itself is not emitted; its children are the first
/// entries and carry paths of the form `{root_path}/{name}`. A contents
/// fetch failure yields zero children for that subtree and is recorded,
/// and the walk continues with the remaining work.
pub async fn enumerate(
    client: &DocsClient,
    project_id: &str,
    root_urn: &str,
    root_path: &str,
) -> Traversal {
    let mut result = Traversal::default();
    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(root_urn.to_string());

    // Frames still to visit; the top of the stack is the next folder in
    // pre-order. The root is a pseudo-frame: fetched, never emitted.
    let mut stack: Vec<FolderEntry> = Vec::new();

    push_children(
        client,
        project_id,
        root_urn,
        root_path,
        &mut stack,
        &mut visited,
        &mut result.failures,
    )
    .await;

    while let Some(entry) = stack.pop() {
        tracing::info!(path = %entry.path, urn = %entry.urn, "processing folder");
        let (urn, path) = (entry.urn.clone(), entry.path.clone());
        result.folders.push(entry);

        push_children(
            client,
            project_id,
            &urn,
            &path,
            &mut stack,
            &mut visited,
            &mut result.failures,
        )
        .await;
    }

    result
}

/// Fetch `folder_urn`'s children and push its subfolders onto the stack,
/// reversed so the first API-ordered child is popped next.
async fn push_children(
    client: &DocsClient,
    project_id: &str,
    folder_urn: &str,
    folder_path: &str,
    stack: &mut Vec<FolderEntry>,
    visited: &mut HashSet<String>,
    failures: &mut Vec<FetchFailure>,
) {
    let items = match client.fetch_folder_contents(project_id, folder_urn).await {
        Ok(items) => items,
        Err(err) => {
            failures.push(FetchFailure::new(folder_urn, folder_path, &err));
            return;
        }
    };

    let mut children: Vec<FolderEntry> = Vec::new();
    for item in &items {
        if !item.is_folder() {
            continue;
        }
        if !visited.insert(item.id.clone()) {
            tracing::warn!(urn = %item.id, "folder already visited, skipping cycle");
            continue;
        }
        children.push(FolderEntry::child_of(folder_path, item.label(), &item.id));
    }

    while let Some(child) = children.pop() {
        stack.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MockHttpClient;
    use crate::config::{Config, ROOT_PATH};
    use std::sync::Arc;

    fn folder_item(urn: &str, name: &str) -> String {
        format!(
            r#"{{"type": "folders", "id": "{}", "attributes": {{"name": "{}"}}}}"#,
            urn, name
        )
    }

    fn setup(mock: &MockHttpClient) -> DocsClient {
        let config = Config::new("tok", "b.p", "urn:root").with_base_url("http://api.test");
        DocsClient::new(Arc::new(mock.clone()), &config)
    }

    #[tokio::test]
    async fn test_empty_root() {
        let mock = MockHttpClient::new();
        mock.set_json_response("urn%3Aroot/contents", 200, r#"{"data": []}"#);
        let client = setup(&mock);

        let traversal = enumerate(&client, "b.p", "urn:root", ROOT_PATH).await;
        assert!(traversal.folders.is_empty());
        assert!(traversal.failures.is_empty());
    }

    #[tokio::test]
    async fn test_files_are_discarded() {
        let mock = MockHttpClient::new();
        mock.set_json_response(
            "urn%3Aroot/contents",
            200,
            &format!(
                r#"{{"data": [{}, {{"type": "items", "id": "urn:file", "attributes": {{"displayName": "model.rvt"}}}}]}}"#,
                folder_item("urn:a", "A")
            ),
        );
        mock.set_json_response("urn%3Aa/contents", 200, r#"{"data": []}"#);
        let client = setup(&mock);

        let traversal = enumerate(&client, "b.p", "urn:root", ROOT_PATH).await;
        let names: Vec<&str> = traversal.folders.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["A"]);
    }

    #[tokio::test]
    async fn test_cycle_is_visited_once() {
        let mock = MockHttpClient::new();
        // A lists the root as its own child; the visited set must stop it
        mock.set_json_response(
            "urn%3Aroot/contents",
            200,
            &format!(r#"{{"data": [{}]}}"#, folder_item("urn:a", "A")),
        );
        mock.set_json_response(
            "urn%3Aa/contents",
            200,
            &format!(r#"{{"data": [{}]}}"#, folder_item("urn:root", "Root Again")),
        );
        let client = setup(&mock);

        let traversal = enumerate(&client, "b.p", "urn:root", ROOT_PATH).await;
        assert_eq!(traversal.folders.len(), 1);
        assert_eq!(traversal.folders[0].urn, "urn:a");
        // Two fetches: root and A; the cycle edge triggers no third
        assert_eq!(mock.request_count(), 2);
    }
}
