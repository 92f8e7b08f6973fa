//! Logging sink configuration.
//!
//! Every log event becomes one `<timestamp> <LEVEL> <message>` line appended
//! to a file opened in append mode at startup. The file handle lives for the
//! rest of the process; the subscriber's writer mutex is the only
//! coordination between concurrent request handlers.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LOG_FILTER;

/// Open the log file in append mode, creating it if absent.
///
/// The returned writer is handed to the tracing `fmt` layer; prior contents
/// are never truncated.
pub fn open_sink(path: &Path) -> io::Result<Mutex<File>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Mutex::new(file))
}

/// Install the global logging sink writing to `path`.
///
/// ANSI colors and event targets are disabled so each line reads
/// `<timestamp> <LEVEL> <message>`. The filter is fixed at INFO; no
/// environment variable is consulted.
pub fn init(path: &Path) -> io::Result<()> {
    let sink = open_sink(path)?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(LOG_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(sink),
        )
        .init();

    Ok(())
}
