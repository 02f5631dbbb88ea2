//! HTTP server for botapi-docs: webhook receiver plus health endpoints.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod api_types;
mod server;
mod webhook;

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use botapi_docs_service::{Dispatcher, RefreshMode, SnapshotCache};
use tower_http::trace::TraceLayer;

use crate::api_error::ApiError;

pub use api_types::{ReadinessResponse, VersionResponse};
pub use server::serve;
pub use webhook::{configure_webhook, receive_update};

/// Shared application state for all HTTP handlers.
pub struct AppState {
    /// Routes decoded updates to their handlers
    pub dispatcher: Arc<Dispatcher>,
    /// Documentation cache, read by the readiness probe
    pub cache: Arc<SnapshotCache>,
    /// Path segment the Bot API posts updates to
    pub bot_token: String,
    /// Expected value of the secret token header
    pub secret_token: String,
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .route("/{token}", post(receive_update))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    "ok"
}

/// Ready once a snapshot is installed; always ready when fetching per query.
async fn readiness(State(state): State<Arc<AppState>>) -> Result<Json<ReadinessResponse>, ApiError> {
    let snapshot = state.cache.store().read().await;
    let (ready, refresh_mode) = match state.cache.mode() {
        RefreshMode::OnDemand => (true, "on_demand"),
        RefreshMode::Background { .. } => (!snapshot.is_empty(), "background"),
    };
    if !ready {
        return Err(ApiError::ServiceUnavailable("documentation snapshot not loaded yet".to_owned()));
    }
    Ok(Json(ReadinessResponse { status: "ready", refresh_mode, snapshot: snapshot.stats() }))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
