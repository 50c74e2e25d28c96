use std::sync::Arc;

use wharf_store::DocumentStore;
use wharf_types::{BatchSummary, Document};

use crate::error::CoreResult;

/// Applies batched document uploads to one workspace's store.
///
/// The HTTP layer decides whether the target store may be created for the
/// request; the pipeline requires a store already obtained.
pub struct IngestionPipeline;

impl IngestionPipeline {
    /// Apply a batch of wire entries strictly in input order.
    ///
    /// Each entry is deserialized individually: entries that are not
    /// well-formed documents are classified as rejected without touching
    /// the store (one bad entry never aborts the batch). Well-formed
    /// documents are awaited one at a time so the target store sees a
    /// deterministic history order.
    ///
    /// `Err` is reserved for backend failures; per-document rejection is
    /// an outcome, not an error.
    pub async fn apply(
        store: &Arc<dyn DocumentStore>,
        entries: Vec<serde_json::Value>,
    ) -> CoreResult<BatchSummary> {
        let mut summary = BatchSummary::new();
        for entry in entries {
            let doc: Document = match serde_json::from_value(entry) {
                Ok(doc) => doc,
                Err(err) => {
                    tracing::debug!(workspace = %store.workspace(), %err, "rejecting malformed batch entry");
                    summary.record_rejected();
                    continue;
                }
            };
            let receipt = store.ingest(doc).await?;
            summary.record(receipt.outcome);
        }
        tracing::debug!(
            workspace = %store.workspace(),
            ingested = summary.num_ingested,
            ignored = summary.num_ignored,
            total = summary.num_total,
            "applied batch"
        );
        Ok(summary)
    }
}
