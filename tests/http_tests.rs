//! End-to-end HTTP tests.
//!
//! Each test binds the real router to an ephemeral loopback port and drives
//! it with reqwest over a real socket.
//!
//! Run with: cargo test --test http_tests

use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

use dockmon::config::{HOME_BODY, LOG_FILTER};
use dockmon::http::start_server;
use dockmon::logging::open_sink;
use dockmon::routes::create_router;

/// Bind the router to an ephemeral port and serve it in the background.
async fn spawn_app() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Failed to read local addr");
    let app = create_router();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server task failed");
    });

    addr
}

#[tokio::test]
async fn home_returns_greeting() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/"))
        .await
        .expect("Request to / failed");

    assert_eq!(response.status().as_u16(), 200);

    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .expect("Non-ASCII content-type header")
        .to_owned();
    assert!(
        content_type.starts_with("text/plain"),
        "unexpected content type: {content_type}"
    );

    let body = response.text().await.expect("Failed to read body");
    assert_eq!(body, HOME_BODY);
}

#[tokio::test]
async fn unregistered_path_returns_404() {
    let addr = spawn_app().await;

    let response = reqwest::get(format!("http://{addr}/missing"))
        .await
        .expect("Request to /missing failed");

    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn home_requests_append_access_log_lines() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("app.log");

    // Scoped subscriber so the test does not touch the global dispatcher.
    // The tokio test runtime is single-threaded, so the handler runs on this
    // thread and picks up the thread-local default.
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(LOG_FILTER))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(open_sink(&path).expect("Failed to open log sink")),
        );
    let _guard = tracing::subscriber::set_default(subscriber);

    let addr = spawn_app().await;

    let requests = 3;
    for _ in 0..requests {
        let response = reqwest::get(format!("http://{addr}/"))
            .await
            .expect("Request to / failed");
        assert_eq!(response.status().as_u16(), 200);
    }

    let contents = std::fs::read_to_string(&path).expect("Failed to read log file");
    let access_lines = contents
        .lines()
        .filter(|line| line.contains("Home route accessed"))
        .count();
    assert!(
        access_lines >= requests,
        "expected at least {requests} access lines, got {access_lines}:\n{contents}"
    );
}

#[tokio::test]
async fn second_bind_on_occupied_port_fails() {
    let addr = spawn_app().await;

    let result = start_server(create_router(), addr).await;
    assert!(
        result.is_err(),
        "second bind on {addr} unexpectedly succeeded"
    );
}
