//! The `export` command: enumerate, aggregate, write files.

use color_eyre::Result;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::aggregate;
use crate::api::DocsClient;
use crate::cli::args::ExportArgs;
use crate::config::{Config, ROOT_PATH};
use crate::export;
use crate::tree;

/// Run a full export against the configured project.
pub async fn handle_export_command(args: &ExportArgs, config: &Config) -> Result<()> {
    let http = Arc::new(ReqwestHttpClient::new());
    let client = DocsClient::new(http, config);

    let traversal = tree::enumerate(
        &client,
        &config.project_id,
        &config.root_folder_urn,
        ROOT_PATH,
    )
    .await;

    for folder in &traversal.folders {
        println!("Folder: {} (URN: {})", folder.path, folder.urn);
    }
    println!("Total folders found: {}", traversal.folders.len());
    if !traversal.failures.is_empty() {
        println!(
            "Warning: {} folder(s) could not be listed and were treated as empty",
            traversal.failures.len()
        );
    }

    if args.folders_only {
        export::json::write_folders(&traversal, &args.json_path)?;
        println!("Folder list exported to {}", args.json_path.display());
        return Ok(());
    }

    let report = aggregate::aggregate(&client, &config.project_id, &traversal.folders).await;

    export::json::write_report(&report, &args.json_path)?;
    println!("Report exported to {}", args.json_path.display());

    if let Some(csv_path) = &args.csv_path {
        export::spreadsheet::write_report(&report, csv_path)?;
        println!("Spreadsheet exported to {}", csv_path.display());
    }

    println!(
        "{} permission record(s) across {} folder(s), {} folder(s) with errors",
        report.permission_count(),
        report.folders.len(),
        report.error_count()
    );

    Ok(())
}
