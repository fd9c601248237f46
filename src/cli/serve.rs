//! The `serve` command: run the JSON HTTP backend.

use color_eyre::Result;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::server::{serve_on, AppState};

/// Run the backend until the server task exits.
pub async fn handle_serve_command(args: &ServeArgs, config: &Config) -> Result<()> {
    let state = AppState::new(Arc::new(ReqwestHttpClient::new()), config);

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let (handle, actual_addr) = serve_on(addr, state).await?;
    println!("Backend listening on http://{}", actual_addr);

    handle.await?;
    Ok(())
}
