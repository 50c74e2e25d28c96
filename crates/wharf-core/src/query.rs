//! Read-only listing operations against one workspace's store.
//!
//! These never create a workspace: callers obtain the store from the
//! registry with `create_if_absent = false` first.

use std::collections::BTreeSet;
use std::sync::Arc;

use wharf_store::DocumentStore;
use wharf_types::Document;

use crate::error::CoreResult;

/// Distinct paths with a current document, ascending.
///
/// Deduplicated even though the store may hold several historical
/// revisions per path.
pub async fn list_paths(store: &Arc<dyn DocumentStore>) -> CoreResult<Vec<String>> {
    let paths: BTreeSet<String> = store
        .get_latest_docs()
        .await?
        .into_iter()
        .map(|doc| doc.path)
        .collect();
    Ok(paths.into_iter().collect())
}

/// The full stored document set, historical revisions included.
pub async fn list_documents(store: &Arc<dyn DocumentStore>) -> CoreResult<Vec<Document>> {
    Ok(store.get_all_docs().await?)
}

/// History at one path, most recent first.
pub async fn list_history(
    store: &Arc<dyn DocumentStore>,
    path: &str,
) -> CoreResult<Vec<Document>> {
    Ok(store.get_all_docs_at_path(path).await?)
}
