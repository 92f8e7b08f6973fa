//! Handler for the monitored home route.

use tracing::instrument;

use crate::config::{HOME_ACCESS_MESSAGE, HOME_BODY};

/// Home route handler.
///
/// Appends one access line to the log sink, then returns the fixed greeting
/// body with status 200 and the default text content type. The log write
/// happens before the response is produced.
#[instrument(name = "home::index")]
pub async fn index() -> &'static str {
    tracing::info!("{}", HOME_ACCESS_MESSAGE);
    HOME_BODY
}
