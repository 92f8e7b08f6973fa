//! Dockmon: a minimal monitoring endpoint for Dockerized app deployments.
//!
//! Exposes a single `GET /` route that appends an access event to `app.log`
//! and answers with a fixed greeting body.

pub mod config;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod routes;
