use serde::{Deserialize, Serialize};

use crate::document::Document;

/// How a store classified one submitted document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IngestOutcome {
    /// Valid and now the current revision at its path.
    AcceptedLatest,
    /// Valid but superseded by a newer revision at the same path.
    AcceptedStale,
    /// Invalid, an exact duplicate, or otherwise not applied.
    Rejected,
}

impl IngestOutcome {
    /// `true` for both accepted variants.
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::AcceptedLatest | Self::AcceptedStale)
    }
}

/// Result of ingesting a single document.
#[derive(Clone, Debug)]
pub struct IngestReceipt {
    pub outcome: IngestOutcome,
    /// The document as stored, present only when accepted.
    pub stored: Option<Document>,
}

impl IngestReceipt {
    pub fn accepted(outcome: IngestOutcome, stored: Document) -> Self {
        Self {
            outcome,
            stored: Some(stored),
        }
    }

    pub fn rejected() -> Self {
        Self {
            outcome: IngestOutcome::Rejected,
            stored: None,
        }
    }
}

/// Tally reported back to a sync peer after a batch upload.
///
/// Maintains `num_ingested + num_ignored == num_total` by construction:
/// [`BatchSummary::record`] bumps the total and exactly one of the other
/// two counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    /// Documents accepted, whether latest or stale.
    pub num_ingested: usize,
    /// Documents ignored or failing validation.
    pub num_ignored: usize,
    /// All documents in the batch.
    pub num_total: usize,
}

impl BatchSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one document's outcome.
    pub fn record(&mut self, outcome: IngestOutcome) {
        self.num_total += 1;
        if outcome.is_accepted() {
            self.num_ingested += 1;
        } else {
            self.num_ignored += 1;
        }
    }

    /// Record a document that never reached the store (malformed on the wire).
    pub fn record_rejected(&mut self) {
        self.record(IngestOutcome::Rejected);
    }
}
