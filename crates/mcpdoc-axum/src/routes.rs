//! Route definitions and application composition.
//!
//! The composed application is the sub-application plus two auxiliary
//! routes. The sub-router is merged as-is: its middleware is already
//! layered onto its routes and its lifecycle hook is passed through
//! untouched, never re-derived.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router, extract::State};
use mcpdoc_core::Transport;
use mcpdoc_mcp::{SubApp, SubAppLifecycle};

/// State for the auxiliary handlers.
#[derive(Clone)]
struct AppState {
    doc_source_count: usize,
}

/// Compose the final application from the documentation server's
/// sub-application.
///
/// Route order is `/`, `/health`, then everything the sub-application
/// defines; the paths are disjoint so no precedence conflict arises.
/// Returns the router together with the sub-application's lifecycle hook,
/// which the caller must invoke around the serve loop.
pub fn compose_app(sub: SubApp, doc_source_count: usize) -> (Router, Arc<dyn SubAppLifecycle>) {
    let state = AppState { doc_source_count };
    let app = Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state)
        .merge(sub.router);
    (app, sub.lifecycle)
}

/// `GET /` — fixed service descriptor.
async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "mcpdoc",
        "transport": Transport::STREAMABLE_HTTP,
        "endpoints": {
            "mcp": "/mcp",
            "health": "/health",
        },
    }))
}

/// `GET /health` — liveness plus the resolved doc-source count.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "transport": Transport::STREAMABLE_HTTP,
        "doc_sources": state.doc_source_count,
    }))
}
