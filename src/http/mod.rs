//! HTTP server module.
//!
//! Plain-HTTP serving with graceful shutdown on SIGTERM/SIGINT.

mod server;
mod shutdown;

pub use server::{start_server, ServerError};
