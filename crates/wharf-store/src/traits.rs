use std::sync::Arc;

use async_trait::async_trait;

use wharf_types::{AuthorAddress, Document, DocumentDraft, IngestReceipt, WorkspaceAddress};

use crate::error::StoreResult;

/// One workspace's document collection and history.
///
/// All implementations must satisfy these invariants:
/// - A store serves exactly one workspace, fixed at construction.
/// - `ingest` never panics on malformed input; bad documents are
///   classified as rejected in the returned receipt.
/// - Listing methods return a stable order within a single call.
/// - Concurrent calls from interleaved requests are safe.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// The workspace this store serves.
    fn workspace(&self) -> &WorkspaceAddress;

    /// Direct administrative write, bypassing signature checks.
    ///
    /// The store fills in workspace, author, timestamp, and signature.
    /// Writing the same path and author again replaces the previous
    /// revision in that slot.
    async fn set(&self, author: &AuthorAddress, draft: DocumentDraft) -> StoreResult<Document>;

    /// Validate and apply one document from a sync peer.
    ///
    /// The receipt classifies the document as accepted (latest or stale)
    /// or rejected. `Err` is reserved for backend failures, not for
    /// invalid documents.
    async fn ingest(&self, doc: Document) -> StoreResult<IngestReceipt>;

    /// Every stored document, including superseded revisions.
    async fn get_all_docs(&self) -> StoreResult<Vec<Document>>;

    /// The current document at each path, one entry per path.
    async fn get_latest_docs(&self) -> StoreResult<Vec<Document>>;

    /// Full history at one path, most recent first.
    async fn get_all_docs_at_path(&self, path: &str) -> StoreResult<Vec<Document>>;
}

/// Constructs stores for newly created workspaces.
///
/// `open` runs inside the registry's create critical section and must not
/// block on I/O; backends that need slow setup should defer it to first use.
pub trait StoreFactory: Send + Sync {
    fn open(&self, workspace: &WorkspaceAddress) -> StoreResult<Arc<dyn DocumentStore>>;
}
