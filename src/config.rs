//! Fixed runtime constants.
//!
//! The service reads no configuration file, CLI arguments, or environment
//! variables; the bind address, log sink path, and response bodies are
//! compile-time constants.

use const_format::formatcp;

/// Interface the listener binds to (all interfaces).
pub const HTTP_HOST: &str = "0.0.0.0";

/// Port the listener binds to.
pub const HTTP_PORT: u16 = 5000;

/// Pre-formatted bind address (compile-time string concatenation).
pub const BIND_ADDR: &str = formatcp!("{}:{}", HTTP_HOST, HTTP_PORT);

/// Log sink path, relative to the working directory.
pub const LOG_FILE: &str = "app.log";

/// Tracing filter for the log sink. Minimum severity recorded is INFO.
pub const LOG_FILTER: &str = "info";

/// Body returned by `GET /`.
pub const HOME_BODY: &str = "Monitoring Docker App";

/// Message appended to the log sink on each home request.
pub const HOME_ACCESS_MESSAGE: &str = "Home route accessed";

/// Connection drain allowance during graceful shutdown, in seconds.
pub const SHUTDOWN_GRACE_SECS: u64 = 30;
