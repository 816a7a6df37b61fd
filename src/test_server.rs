use std::net::TcpListener as StdTcpListener;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use axum::http::header::USER_AGENT;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::config::BROWSER_USER_AGENT;

/// How long `/slow` waits before answering
pub(crate) const SLOW_DELAY: Duration = Duration::from_secs(5);

fn router() -> Router {
    Router::new()
        .route("/ok", get(|| async { StatusCode::OK }))
        .route("/created", get(|| async { StatusCode::CREATED }))
        .route("/forbidden", get(|| async { StatusCode::FORBIDDEN }))
        .route("/missing", get(|| async { StatusCode::NOT_FOUND }))
        .route("/broken", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
        .route("/moved", get(|| async { Redirect::permanent("/ok") }))
        .route("/not-modified", get(|| async { StatusCode::NOT_MODIFIED }))
        .route("/found-nowhere", get(|| async { StatusCode::FOUND }))
        .route("/slow", get(slow))
        .route("/browser-only", get(browser_only))
}

async fn slow() -> StatusCode {
    tokio::time::sleep(SLOW_DELAY).await;
    StatusCode::OK
}

async fn browser_only(headers: HeaderMap) -> StatusCode {
    match headers.get(USER_AGENT).and_then(|agent| agent.to_str().ok()) {
        Some(agent) if agent == BROWSER_USER_AGENT => StatusCode::OK,
        _ => StatusCode::FORBIDDEN,
    }
}

/// Serve the test routes on an ephemeral port and return the base URL.
///
/// The server lives on its own runtime thread so the blocking client can be
/// driven from the test thread.
pub(crate) fn spawn() -> String {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to build test runtime");
        runtime.block_on(async move {
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind test server");
            tx.send(listener.local_addr().expect("Missing local address"))
                .expect("Test harness went away");
            axum::serve(listener, router())
                .await
                .expect("Test server failed");
        });
    });
    let addr = rx.recv().expect("Test server did not start");
    format!("http://{}", addr)
}

/// A URL on a port that was just released, so connecting is refused
pub(crate) fn refused_url() -> String {
    let listener = StdTcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("Missing local address");
    drop(listener);
    format!("http://{}/", addr)
}
