//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use super::shutdown;

/// Server startup error.
///
/// A port already in use surfaces here as the underlying bind I/O error;
/// nothing is recovered or retried.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Start the HTTP server on `addr`.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, addr: SocketAddr) -> Result<(), ServerError> {
    let handle = Handle::new();

    // Setup graceful shutdown
    shutdown::setup_shutdown_handler(handle.clone());

    tracing::info!(%addr, "Starting HTTP server");

    axum_server::bind(addr)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}
