use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Largest accepted request body. Sync clients upload whole batches in
/// one POST, so this is well above the default.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Build the axum router with all pub endpoints.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Routes for humans
        .route("/", get(handler::home))
        .route("/workspace/:workspace", get(handler::workspace_page))
        // Sync API
        .route("/api/v1/:workspace/paths", get(handler::list_paths))
        .route(
            "/api/v1/:workspace/documents",
            get(handler::list_documents).post(handler::ingest_documents),
        )
        .route("/api/v1/:workspace/delete", post(handler::delete_workspace))
        .route("/demo/recreate", post(handler::recreate_demo))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
