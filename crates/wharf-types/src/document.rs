use serde::{Deserialize, Serialize};

use crate::address::{AuthorAddress, WorkspaceAddress};
use crate::error::TypeError;

/// The only document format Wharf understands.
pub const FORMAT_ES4: &str = "es.4";

/// Longest accepted document path, in bytes.
pub const MAX_PATH_LEN: usize = 512;

/// A single versioned unit of content at a path, authored by some identity.
///
/// Wharf's core treats documents as opaque: it never interprets the fields,
/// it only hands documents to a store and classifies the outcome. The shape
/// check in [`Document::validate`] exists for stores to call during
/// ingestion; signature verification is a store concern and is not done here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Format tag, e.g. `es.4`.
    pub format: String,
    /// The workspace this document belongs to.
    pub workspace: WorkspaceAddress,
    /// Path within the workspace, always starting with `/`.
    pub path: String,
    /// Content payload. Empty content marks a deleted document.
    pub content: String,
    /// The identity that authored this revision.
    pub author: AuthorAddress,
    /// Microseconds since the Unix epoch.
    pub timestamp: i64,
    /// Signature over the document, opaque to Wharf.
    pub signature: String,
    /// Optional expiry, microseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_after: Option<i64>,
}

impl Document {
    /// Check the basic shape of this document.
    ///
    /// Returns `Err` when a field is structurally unusable: wrong format
    /// tag, bad path, non-positive timestamp, or missing signature.
    pub fn validate(&self) -> Result<(), TypeError> {
        if self.format != FORMAT_ES4 {
            return Err(TypeError::InvalidDocument(format!(
                "unknown format {:?}",
                self.format
            )));
        }
        validate_path(&self.path)?;
        if self.timestamp <= 0 {
            return Err(TypeError::InvalidDocument(
                "timestamp must be positive".into(),
            ));
        }
        if let Some(delete_after) = self.delete_after {
            if delete_after < self.timestamp {
                return Err(TypeError::InvalidDocument(
                    "deleteAfter must not precede timestamp".into(),
                ));
            }
        }
        if self.signature.is_empty() {
            return Err(TypeError::InvalidDocument("signature is empty".into()));
        }
        Ok(())
    }
}

/// Validate a document path: non-empty, leading `/`, no `//`, printable ASCII.
pub fn validate_path(path: &str) -> Result<(), TypeError> {
    if path.is_empty() || path.len() > MAX_PATH_LEN {
        return Err(TypeError::InvalidDocument(format!(
            "path must be 1-{MAX_PATH_LEN} bytes"
        )));
    }
    if !path.starts_with('/') {
        return Err(TypeError::InvalidDocument(
            "path must start with '/'".into(),
        ));
    }
    if path.contains("//") {
        return Err(TypeError::InvalidDocument(
            "path must not contain '//'".into(),
        ));
    }
    if path
        .chars()
        .any(|ch| !ch.is_ascii() || ch.is_ascii_control() || ch == ' ')
    {
        return Err(TypeError::InvalidDocument(
            "path must be printable ASCII without spaces".into(),
        ));
    }
    Ok(())
}

/// The author-supplied part of a document, used for direct administrative
/// writes via `DocumentStore::set`. The store fills in workspace, author,
/// timestamp, and signature.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentDraft {
    pub path: String,
    pub content: String,
    /// Microseconds since the Unix epoch; the store stamps the current
    /// time when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

impl DocumentDraft {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            timestamp: None,
        }
    }
}
