use accperm::cli::{parse_args, run_cli_command, CliCommand, USAGE, VERSION};
use accperm::config::Config;

use color_eyre::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("Error: {}\n\n{}", message, USAGE);
            std::process::exit(2);
        }
    };

    // Handle flags that need no configuration before any initialization
    match command {
        CliCommand::Version => {
            println!("accperm {}", VERSION);
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        _ => {}
    }

    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("accperm=info")),
        )
        .init();

    // Configuration is read exactly once; a missing token is fatal here
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_cli_command(&command, &config))
}
