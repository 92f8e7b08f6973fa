//! HTTP route handlers.
//!
//! A single route is registered: `GET /`. Unregistered paths fall through to
//! axum's default 404 handling. Request tracing is enabled via middleware
//! that generates a unique request ID for each incoming request.

pub mod home;

use axum::{middleware, routing::get, Router};

use crate::middleware::request_span_layer;

/// Creates the axum router with the home route and request span middleware.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home::index))
        .layer(middleware::from_fn(request_span_layer))
}
