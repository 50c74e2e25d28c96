use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use wharf_types::{
    document::validate_path, AuthorAddress, Document, DocumentDraft, IngestOutcome, IngestReceipt,
    WorkspaceAddress, FORMAT_ES4,
};

use crate::error::StoreResult;
use crate::traits::{DocumentStore, StoreFactory};

/// In-memory, volatile document store.
///
/// Keeps one document per (path, author) pair: a newer revision from the
/// same author replaces the older one. The "latest" document at a path is
/// the one with the highest timestamp, ties broken by the greater author
/// address. History at a path is the newest revision from each author.
///
/// All state lives behind a `RwLock` over nested `BTreeMap`s, which makes
/// listing order stable (path ascending, then author ascending) without
/// extra sorting.
pub struct MemoryStore {
    workspace: WorkspaceAddress,
    // path -> author -> that author's newest document at the path
    slots: RwLock<BTreeMap<String, BTreeMap<AuthorAddress, Document>>>,
}

impl MemoryStore {
    pub fn new(workspace: WorkspaceAddress) -> Self {
        Self {
            workspace,
            slots: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of stored documents across all paths and authors.
    pub fn len(&self) -> usize {
        self.slots
            .read()
            .expect("lock poisoned")
            .values()
            .map(|authors| authors.len())
            .sum()
    }

    /// Returns `true` if the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.slots.read().expect("lock poisoned").is_empty()
    }
}

/// The latest document among one path's author slots.
fn latest_of(authors: &BTreeMap<AuthorAddress, Document>) -> Option<&Document> {
    authors
        .values()
        .max_by(|a, b| (a.timestamp, &a.author).cmp(&(b.timestamp, &b.author)))
}

fn now_micros() -> i64 {
    chrono::Utc::now().timestamp_micros()
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn workspace(&self) -> &WorkspaceAddress {
        &self.workspace
    }

    async fn set(&self, author: &AuthorAddress, draft: DocumentDraft) -> StoreResult<Document> {
        validate_path(&draft.path)?;
        let doc = Document {
            format: FORMAT_ES4.into(),
            workspace: self.workspace.clone(),
            path: draft.path,
            content: draft.content,
            author: author.clone(),
            timestamp: draft.timestamp.unwrap_or_else(now_micros),
            // Administrative writes are not signed; the placeholder keeps
            // the document shape-valid.
            signature: format!("local.{}", author.shortname()),
            delete_after: None,
        };
        let mut slots = self.slots.write().expect("lock poisoned");
        slots
            .entry(doc.path.clone())
            .or_default()
            .insert(author.clone(), doc.clone());
        Ok(doc)
    }

    async fn ingest(&self, doc: Document) -> StoreResult<IngestReceipt> {
        if let Err(err) = doc.validate() {
            tracing::debug!(workspace = %self.workspace, %err, "rejecting malformed document");
            return Ok(IngestReceipt::rejected());
        }
        if doc.workspace != self.workspace {
            tracing::debug!(
                workspace = %self.workspace,
                document_workspace = %doc.workspace,
                "rejecting document addressed to another workspace"
            );
            return Ok(IngestReceipt::rejected());
        }

        let mut slots = self.slots.write().expect("lock poisoned");
        let authors = slots.entry(doc.path.clone()).or_default();

        if let Some(existing) = authors.get(&doc.author) {
            // Exact duplicate, or obsolete relative to what we already
            // hold from this author.
            if (existing.timestamp, &existing.signature) >= (doc.timestamp, &doc.signature) {
                return Ok(IngestReceipt::rejected());
            }
        }

        authors.insert(doc.author.clone(), doc.clone());
        let is_latest = latest_of(authors).map(|latest| latest == &doc).unwrap_or(false);
        let outcome = if is_latest {
            IngestOutcome::AcceptedLatest
        } else {
            IngestOutcome::AcceptedStale
        };
        Ok(IngestReceipt::accepted(outcome, doc))
    }

    async fn get_all_docs(&self) -> StoreResult<Vec<Document>> {
        let slots = self.slots.read().expect("lock poisoned");
        Ok(slots
            .values()
            .flat_map(|authors| authors.values().cloned())
            .collect())
    }

    async fn get_latest_docs(&self) -> StoreResult<Vec<Document>> {
        let slots = self.slots.read().expect("lock poisoned");
        Ok(slots
            .values()
            .filter_map(|authors| latest_of(authors).cloned())
            .collect())
    }

    async fn get_all_docs_at_path(&self, path: &str) -> StoreResult<Vec<Document>> {
        let slots = self.slots.read().expect("lock poisoned");
        let mut docs: Vec<Document> = slots
            .get(path)
            .map(|authors| authors.values().cloned().collect())
            .unwrap_or_default();
        // Most recent first, for display.
        docs.sort_by(|a, b| (b.timestamp, &b.author).cmp(&(a.timestamp, &a.author)));
        Ok(docs)
    }
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("workspace", &self.workspace)
            .field("doc_count", &self.len())
            .finish()
    }
}

/// Factory for volatile [`MemoryStore`] backends.
///
/// Deleting a workspace built by this factory destroys its documents;
/// recreation on a later permitted write starts empty.
#[derive(Debug, Default)]
pub struct MemoryFactory;

impl StoreFactory for MemoryFactory {
    fn open(&self, workspace: &WorkspaceAddress) -> StoreResult<Arc<dyn DocumentStore>> {
        Ok(Arc::new(MemoryStore::new(workspace.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WS: &str = "+gardening.pals";
    const BIRD: &str = "@bird.btr46n7ij6eq6hwnpvfcdakxqy3e6vz4e5vmw33ur7tjey5dkx6ea";
    const SUZY: &str = "@suzy.bo5sotcncvkr7p4c3lnexxpb4hjqi5tcxcov5b4irbnnz2teoifua";

    fn store() -> MemoryStore {
        MemoryStore::new(WorkspaceAddress::parse(WS).unwrap())
    }

    fn author(addr: &str) -> AuthorAddress {
        AuthorAddress::parse(addr).unwrap()
    }

    fn doc(path: &str, author_addr: &str, timestamp: i64, content: &str) -> Document {
        Document {
            format: FORMAT_ES4.into(),
            workspace: WorkspaceAddress::parse(WS).unwrap(),
            path: path.into(),
            content: content.into(),
            author: author(author_addr),
            timestamp,
            signature: format!("sig{timestamp}"),
            delete_after: None,
        }
    }

    // -----------------------------------------------------------------------
    // Ingestion outcomes
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn ingest_fresh_document_is_latest() {
        let store = store();
        let receipt = store.ingest(doc("/wiki/a", BIRD, 100, "v1")).await.unwrap();
        assert_eq!(receipt.outcome, IngestOutcome::AcceptedLatest);
        assert!(receipt.stored.is_some());
    }

    #[tokio::test]
    async fn ingest_older_cross_author_revision_is_stale() {
        let store = store();
        store.ingest(doc("/wiki/a", BIRD, 200, "newer")).await.unwrap();
        let receipt = store.ingest(doc("/wiki/a", SUZY, 100, "older")).await.unwrap();
        assert_eq!(receipt.outcome, IngestOutcome::AcceptedStale);
        // Stale revision is still stored in history.
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn ingest_exact_duplicate_is_rejected() {
        let store = store();
        let d = doc("/wiki/a", BIRD, 100, "v1");
        store.ingest(d.clone()).await.unwrap();
        let receipt = store.ingest(d).await.unwrap();
        assert_eq!(receipt.outcome, IngestOutcome::Rejected);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn ingest_obsolete_same_author_revision_is_rejected() {
        let store = store();
        store.ingest(doc("/wiki/a", BIRD, 200, "newer")).await.unwrap();
        let receipt = store.ingest(doc("/wiki/a", BIRD, 100, "older")).await.unwrap();
        assert_eq!(receipt.outcome, IngestOutcome::Rejected);
        // The newer revision still wins.
        let latest = store.get_latest_docs().await.unwrap();
        assert_eq!(latest[0].content, "newer");
    }

    #[tokio::test]
    async fn ingest_malformed_document_is_rejected() {
        let store = store();
        let mut bad = doc("/wiki/a", BIRD, 100, "v1");
        bad.format = "es.99".into();
        let receipt = store.ingest(bad).await.unwrap();
        assert_eq!(receipt.outcome, IngestOutcome::Rejected);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn ingest_wrong_workspace_is_rejected() {
        let store = store();
        let mut foreign = doc("/wiki/a", BIRD, 100, "v1");
        foreign.workspace = WorkspaceAddress::parse("+other.ws").unwrap();
        let receipt = store.ingest(foreign).await.unwrap();
        assert_eq!(receipt.outcome, IngestOutcome::Rejected);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn equal_timestamps_break_ties_by_author() {
        let store = store();
        store.ingest(doc("/wiki/a", BIRD, 100, "bird")).await.unwrap();
        // @suzy sorts after @bird, so at equal timestamps suzy's doc wins.
        let receipt = store.ingest(doc("/wiki/a", SUZY, 100, "suzy")).await.unwrap();
        assert_eq!(receipt.outcome, IngestOutcome::AcceptedLatest);
        let latest = store.get_latest_docs().await.unwrap();
        assert_eq!(latest[0].content, "suzy");
    }

    // -----------------------------------------------------------------------
    // Administrative set
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn set_stamps_and_stores() {
        let store = store();
        let stored = store
            .set(&author(BIRD), DocumentDraft::new("/about/me", "hello"))
            .await
            .unwrap();
        assert_eq!(stored.format, FORMAT_ES4);
        assert!(stored.timestamp > 0);
        assert!(!stored.signature.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn set_same_slot_twice_keeps_one_document() {
        let store = store();
        let a = author(BIRD);
        store.set(&a, DocumentDraft::new("/about/me", "one")).await.unwrap();
        store.set(&a, DocumentDraft::new("/about/me", "two")).await.unwrap();
        assert_eq!(store.len(), 1);
        let latest = store.get_latest_docs().await.unwrap();
        assert_eq!(latest[0].content, "two");
    }

    #[tokio::test]
    async fn set_rejects_bad_path() {
        let store = store();
        let result = store
            .set(&author(BIRD), DocumentDraft::new("no-slash", "x"))
            .await;
        assert!(result.is_err());
    }

    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn get_all_docs_includes_history() {
        let store = store();
        store.ingest(doc("/wiki/a", BIRD, 100, "bird")).await.unwrap();
        store.ingest(doc("/wiki/a", SUZY, 200, "suzy")).await.unwrap();
        store.ingest(doc("/wiki/b", BIRD, 300, "b")).await.unwrap();
        assert_eq!(store.get_all_docs().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn get_latest_docs_is_one_per_path_sorted() {
        let store = store();
        store.ingest(doc("/wiki/b", BIRD, 100, "b-bird")).await.unwrap();
        store.ingest(doc("/wiki/a", BIRD, 100, "a-bird")).await.unwrap();
        store.ingest(doc("/wiki/a", SUZY, 200, "a-suzy")).await.unwrap();

        let latest = store.get_latest_docs().await.unwrap();
        assert_eq!(latest.len(), 2);
        assert_eq!(latest[0].path, "/wiki/a");
        assert_eq!(latest[0].content, "a-suzy");
        assert_eq!(latest[1].path, "/wiki/b");
    }

    #[tokio::test]
    async fn history_is_most_recent_first() {
        let store = store();
        store.ingest(doc("/wiki/a", BIRD, 100, "old")).await.unwrap();
        store.ingest(doc("/wiki/a", SUZY, 300, "new")).await.unwrap();

        let history = store.get_all_docs_at_path("/wiki/a").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].content, "new");
        assert_eq!(history[1].content, "old");
    }

    #[tokio::test]
    async fn history_of_unknown_path_is_empty() {
        let store = store();
        assert!(store.get_all_docs_at_path("/nope").await.unwrap().is_empty());
    }

    // -----------------------------------------------------------------------
    // Factory
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn factory_opens_empty_store_for_workspace() {
        let ws = WorkspaceAddress::parse(WS).unwrap();
        let store = MemoryFactory.open(&ws).unwrap();
        assert_eq!(store.workspace(), &ws);
        assert!(store.get_all_docs().await.unwrap().is_empty());
    }
}
