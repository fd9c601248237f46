//! CLI module.
//!
//! Argument parsing and the two command entry points. The dispatcher is
//! called from `main()` after configuration is loaded:
//!
//! ```ignore
//! use accperm::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args())?;
//! runtime.block_on(run_cli_command(&command, &config))?;
//! ```

pub mod args;
pub mod export;
pub mod serve;

pub use args::{parse_args, CliCommand, ExportArgs, ServeArgs, USAGE};
pub use export::handle_export_command;
pub use serve::handle_serve_command;

use color_eyre::Result;

use crate::config::Config;

/// Version string baked in at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Dispatch a parsed command.
///
/// `Version` and `Help` are expected to be handled before configuration
/// is loaded; they print here as a fallback.
pub async fn run_cli_command(command: &CliCommand, config: &Config) -> Result<()> {
    match command {
        CliCommand::Export(args) => handle_export_command(args, config).await,
        CliCommand::Serve(args) => handle_serve_command(args, config).await,
        CliCommand::Version => {
            println!("accperm {}", VERSION);
            Ok(())
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}
