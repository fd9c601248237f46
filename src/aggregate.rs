//! Per-folder permission aggregation.
//!
//! Fetches the permission list for every discovered folder and merges the
//! results into one report. Failures are per-entry: a folder whose fetch
//! fails is recorded with its error and the batch carries on, so the
//! report always holds exactly one element per input folder.

use serde::Serialize;

use crate::api::DocsClient;
use crate::models::{FolderEntry, PermissionRecord};

/// Outcome of one folder's permission fetch.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum PermissionsOutcome {
    /// Permission records, possibly empty
    Records(Vec<PermissionRecord>),
    /// The fetch failed; status is absent for transport-level failures
    Failed { status: Option<u16>, detail: String },
}

impl PermissionsOutcome {
    /// Whether this outcome is a recorded failure.
    pub fn is_failed(&self) -> bool {
        matches!(self, PermissionsOutcome::Failed { .. })
    }
}

/// One folder with its permission outcome.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FolderPermissions {
    #[serde(flatten)]
    pub entry: FolderEntry,
    pub outcome: PermissionsOutcome,
}

/// Aggregated permissions for a whole traversal, in traversal order.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct AggregateReport {
    pub folders: Vec<FolderPermissions>,
}

impl AggregateReport {
    /// Number of folders whose permission fetch failed.
    pub fn error_count(&self) -> usize {
        self.folders
            .iter()
            .filter(|f| f.outcome.is_failed())
            .count()
    }

    /// Total permission records across all folders.
    pub fn permission_count(&self) -> usize {
        self.folders
            .iter()
            .map(|f| match &f.outcome {
                PermissionsOutcome::Records(records) => records.len(),
                PermissionsOutcome::Failed { .. } => 0,
            })
            .sum()
    }
}

/// Fetch permissions for each folder, sequentially, in input order.
pub async fn aggregate(
    client: &DocsClient,
    project_id: &str,
    folders: &[FolderEntry],
) -> AggregateReport {
    let mut report = AggregateReport::default();

    for entry in folders {
        let outcome = match client
            .fetch_folder_permissions(project_id, &entry.urn)
            .await
        {
            Ok(records) => PermissionsOutcome::Records(records),
            Err(err) => PermissionsOutcome::Failed {
                status: err.status(),
                detail: err.to_string(),
            },
        };
        report.folders.push(FolderPermissions {
            entry: entry.clone(),
            outcome,
        });
    }

    report
}
