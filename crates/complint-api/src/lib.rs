//! Complint API: REST surface over the diagnostic gateway
pub mod handlers;
pub mod metrics;
pub mod middleware;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use complint_analyzers::default_registry;
use complint_browsers::BrowserTargetResolver;
use complint_core::Gateway;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;

pub const SERVICE_NAME: &str = "complint";

/// Oversized payloads are rejected before analysis begins.
const MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<Gateway>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new() -> Self {
        let gateway = Gateway::new(default_registry(), Box::new(BrowserTargetResolver::new()));
        Self { gateway: Arc::new(gateway), started_at: Instant::now() }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::playground))
        .route("/playground", get(handlers::playground))
        .route("/api/status", get(handlers::status))
        .route("/api/echo", post(handlers::echo))
        .route("/api/lint", post(handlers::lint))
        .route("/metrics", get(handlers::export_metrics))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(middleware::cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(addr: &str) {
    let app = create_app(AppState::new());
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("Complint API listening on {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
