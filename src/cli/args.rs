//! Command-line argument parsing.
//!
//! Hand-rolled: two subcommands and a couple of flags do not warrant a
//! parser dependency.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Walk the tree, aggregate permissions, write export files
    Export(ExportArgs),
    /// Run the JSON HTTP backend
    Serve(ServeArgs),
    /// Show version information
    Version,
    /// Show usage
    Help,
}

/// Arguments of the `export` subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArgs {
    /// Skip permission aggregation; write the folder list only
    pub folders_only: bool,
    pub json_path: PathBuf,
    /// CSV output; `None` in folders-only mode unless given explicitly
    pub csv_path: Option<PathBuf>,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            folders_only: false,
            json_path: PathBuf::from("folder_permissions.json"),
            csv_path: Some(PathBuf::from("folder_permissions.csv")),
        }
    }
}

/// Arguments of the `serve` subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct ServeArgs {
    pub port: u16,
}

impl Default for ServeArgs {
    fn default() -> Self {
        Self { port: 5000 }
    }
}

/// Usage text printed for `--help` and argument errors.
pub const USAGE: &str = "\
accperm - folder tree and permission export for ACC / BIM 360

Usage:
  accperm export [--folders-only] [--json PATH] [--csv PATH]
  accperm serve [--port PORT]
  accperm --version

Configuration is read from the environment (or a .env file):
  ACCESS_TOKEN, PROJECT_ID, ROOT_FOLDER_URN are required;
  APS_BASE_URL overrides the API base URL.";

/// Parse command-line arguments into a command.
pub fn parse_args<I>(args: I) -> Result<CliCommand, String>
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);

    let Some(first) = args.next() else {
        return Ok(CliCommand::Help);
    };

    match first.as_str() {
        "--version" | "-V" => Ok(CliCommand::Version),
        "--help" | "-h" => Ok(CliCommand::Help),
        "export" => parse_export(args),
        "serve" => parse_serve(args),
        other => Err(format!("unknown command: {}", other)),
    }
}

fn parse_export<I>(mut args: I) -> Result<CliCommand, String>
where
    I: Iterator<Item = String>,
{
    let mut parsed = ExportArgs::default();
    let mut json_given = false;
    let mut csv_given = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--folders-only" => parsed.folders_only = true,
            "--json" => {
                let value = args.next().ok_or("--json requires a path")?;
                parsed.json_path = PathBuf::from(value);
                json_given = true;
            }
            "--csv" => {
                let value = args.next().ok_or("--csv requires a path")?;
                parsed.csv_path = Some(PathBuf::from(value));
                csv_given = true;
            }
            other => return Err(format!("unknown export flag: {}", other)),
        }
    }

    // Folders-only runs get a different default file name and no
    // spreadsheet unless asked for
    if parsed.folders_only {
        if !json_given {
            parsed.json_path = PathBuf::from("subfolders.json");
        }
        if !csv_given {
            parsed.csv_path = None;
        }
    }

    Ok(CliCommand::Export(parsed))
}

fn parse_serve<I>(mut args: I) -> Result<CliCommand, String>
where
    I: Iterator<Item = String>,
{
    let mut parsed = ServeArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" => {
                let value = args.next().ok_or("--port requires a number")?;
                parsed.port = value
                    .parse()
                    .map_err(|_| format!("invalid port: {}", value))?;
            }
            other => return Err(format!("unknown serve flag: {}", other)),
        }
    }

    Ok(CliCommand::Serve(parsed))
}
