//! CSV spreadsheet export.
//!
//! One row per (folder, permission) pair with a fixed column set. A
//! folder whose permission fetch failed produces a single placeholder
//! row; a folder with an empty permission list produces no rows.

use color_eyre::{eyre::WrapErr, Result};
use std::path::Path;

use crate::aggregate::{AggregateReport, PermissionsOutcome};

const COLUMNS: [&str; 10] = [
    "Folder Name",
    "path",
    "URN",
    "Subject Name",
    "Email",
    "User Type",
    "Subject Status",
    "Subject Type",
    "Actions",
    "Inherit Actions",
];

/// Write the aggregate report as a CSV spreadsheet.
pub fn write_report(report: &AggregateReport, path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).wrap_err(format!("Failed to create {:?}", path))?;
    writer.write_record(COLUMNS).wrap_err("Failed to write header")?;

    for folder in &report.folders {
        let entry = &folder.entry;
        match &folder.outcome {
            PermissionsOutcome::Records(records) => {
                for permission in records {
                    writer
                        .write_record([
                            entry.name.as_str(),
                            entry.path.as_str(),
                            entry.urn.as_str(),
                            permission.name.as_str(),
                            permission.email.as_str(),
                            permission.user_type.as_str(),
                            permission.subject_status.as_str(),
                            permission.subject_type.as_str(),
                            permission.actions.join(", ").as_str(),
                            permission.inherit_actions.join(", ").as_str(),
                        ])
                        .wrap_err("Failed to write row")?;
                }
            }
            PermissionsOutcome::Failed { detail, .. } => {
                writer
                    .write_record([
                        entry.name.as_str(),
                        entry.path.as_str(),
                        entry.urn.as_str(),
                        format!("(permissions unavailable: {})", detail).as_str(),
                        "",
                        "",
                        "",
                        "",
                        "",
                        "",
                    ])
                    .wrap_err("Failed to write placeholder row")?;
            }
        }
    }

    writer.flush().wrap_err("Failed to flush spreadsheet")?;
    tracing::info!(file = %path.display(), "spreadsheet written");
    Ok(())
}
