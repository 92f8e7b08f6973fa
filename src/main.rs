//! Dockmon: a minimal monitoring endpoint for Dockerized app deployments.
//!
//! This is the application entry point. It installs the append-mode file
//! logging sink, sets up the axum router with the home route, and starts the
//! HTTP server on the fixed bind address.

use std::net::SocketAddr;
use std::path::Path;

use dockmon::config::{BIND_ADDR, LOG_FILE};
use dockmon::http::start_server;
use dockmon::logging;
use dockmon::routes::create_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configure the logging sink before anything else so startup
    // diagnostics land in the log file
    logging::init(Path::new(LOG_FILE))?;
    tracing::info!(log_file = LOG_FILE, "Logging sink ready");

    // Create router
    let app = create_router();

    // Start server
    let addr: SocketAddr = BIND_ADDR.parse().expect("Invalid bind address constant");
    start_server(app, addr).await?;

    Ok(())
}
