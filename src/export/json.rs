//! JSON export.
//!
//! Pretty-printed, duplicate-preserving arrays. Folder names are not
//! assumed unique, so records are never keyed by name.

use color_eyre::{eyre::WrapErr, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::aggregate::{AggregateReport, PermissionsOutcome};
use crate::models::PermissionRecord;
use crate::tree::Traversal;

#[derive(Serialize)]
struct FolderRow<'a> {
    name: &'a str,
    urn: &'a str,
    path: &'a str,
}

#[derive(Serialize)]
struct ReportRow<'a> {
    name: &'a str,
    urn: &'a str,
    path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    permissions: Option<&'a [PermissionRecord]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorRow<'a>>,
}

#[derive(Serialize)]
struct ErrorRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<u16>,
    detail: &'a str,
}

/// Write the folders discovered by a traversal, one object per folder.
pub fn write_folders(traversal: &Traversal, path: &Path) -> Result<()> {
    let rows: Vec<FolderRow> = traversal
        .folders
        .iter()
        .map(|f| FolderRow {
            name: &f.name,
            urn: &f.urn,
            path: &f.path,
        })
        .collect();
    write_pretty(&rows, path)
}

/// Write the full aggregate report, one object per folder with either its
/// permission list or the recorded error.
pub fn write_report(report: &AggregateReport, path: &Path) -> Result<()> {
    let rows: Vec<ReportRow> = report
        .folders
        .iter()
        .map(|f| {
            let (permissions, error) = match &f.outcome {
                PermissionsOutcome::Records(records) => (Some(records.as_slice()), None),
                PermissionsOutcome::Failed { status, detail } => (
                    None,
                    Some(ErrorRow {
                        status: *status,
                        detail,
                    }),
                ),
            };
            ReportRow {
                name: &f.entry.name,
                urn: &f.entry.urn,
                path: &f.entry.path,
                permissions,
                error,
            }
        })
        .collect();
    write_pretty(&rows, path)
}

fn write_pretty<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(value).wrap_err("Failed to serialize export")?;
    fs::write(path, json).wrap_err(format!("Failed to write {:?}", path))?;
    tracing::info!(file = %path.display(), "export written");
    Ok(())
}
