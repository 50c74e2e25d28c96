use axum::extract::{Path, State};
use axum::response::{Html, Json, Redirect};

use wharf_core::{query, DemoSeeder, IngestionPipeline};
use wharf_types::{BatchSummary, Document};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;
use crate::views;

/// GET `/` — workspace list, or a generic notice when not discoverable.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    let workspaces = state.registry.list().await;
    Html(views::home_page(&workspaces, &state.config))
}

/// GET `/workspace/:workspace` — human detail view.
pub async fn workspace_page(
    State(state): State<AppState>,
    Path(workspace): Path<String>,
) -> ServerResult<Html<String>> {
    let store = state.registry.obtain(&workspace, false).await?;
    let latest = store.get_latest_docs().await.map_err(wharf_core::CoreError::from)?;
    let mut sections = Vec::with_capacity(latest.len());
    for doc in latest {
        let history = query::list_history(&store, &doc.path).await?;
        sections.push((doc, history));
    }
    Ok(Html(views::workspace_page(store.workspace(), &sections)))
}

/// GET `/api/v1/:workspace/paths` — distinct paths, sorted.
pub async fn list_paths(
    State(state): State<AppState>,
    Path(workspace): Path<String>,
) -> ServerResult<Json<Vec<String>>> {
    let store = state.registry.obtain(&workspace, false).await?;
    Ok(Json(query::list_paths(&store).await?))
}

/// GET `/api/v1/:workspace/documents` — all documents, history included.
pub async fn list_documents(
    State(state): State<AppState>,
    Path(workspace): Path<String>,
) -> ServerResult<Json<Vec<Document>>> {
    let store = state.registry.obtain(&workspace, false).await?;
    Ok(Json(query::list_documents(&store).await?))
}

/// POST `/api/v1/:workspace/documents` — batch upload from a sync peer.
///
/// Policy runs up front: read-only mode wins over everything, and a body
/// that is not a JSON array is refused before any store is obtained, so a
/// malformed push can never create a workspace.
pub async fn ingest_documents(
    State(state): State<AppState>,
    Path(workspace): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> ServerResult<Json<BatchSummary>> {
    if state.config.readonly {
        return Err(ServerError::ReadOnly);
    }
    let serde_json::Value::Array(entries) = body else {
        return Err(ServerError::BadRequest(
            "expected a JSON array of documents".into(),
        ));
    };
    let store = state
        .registry
        .obtain(&workspace, state.config.allow_push_to_new_workspaces)
        .await?;
    let summary = IngestionPipeline::apply(&store, entries).await?;
    Ok(Json(summary))
}

/// POST `/api/v1/:workspace/delete` — drop a workspace.
///
/// Idempotent; the workspace comes back if clients sync it again.
pub async fn delete_workspace(
    State(state): State<AppState>,
    Path(workspace): Path<String>,
) -> Redirect {
    state.registry.delete(&workspace).await;
    Redirect::to("/")
}

/// POST `/demo/recreate` — restore the demo workspace.
pub async fn recreate_demo(State(state): State<AppState>) -> ServerResult<Redirect> {
    DemoSeeder::ensure_seeded(&state.registry).await?;
    Ok(Redirect::to("/"))
}
