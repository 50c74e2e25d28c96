//! Foundation types for the Wharf pub server.
//!
//! This crate provides the address, document, and tally types shared by
//! every other Wharf crate.
//!
//! # Key Types
//!
//! - [`WorkspaceAddress`] — Validated `+name.suffix` workspace identifier
//! - [`AuthorAddress`] — Validated `@name.pubkey` author identity
//! - [`Document`] — A single versioned unit of content at a path
//! - [`IngestOutcome`] — How a store classified one submitted document
//! - [`BatchSummary`] — Tally reported back after a batch upload

pub mod address;
pub mod document;
pub mod error;
pub mod outcome;

pub use address::{AuthorAddress, WorkspaceAddress};
pub use document::{Document, DocumentDraft, FORMAT_ES4};
pub use error::TypeError;
pub use outcome::{BatchSummary, IngestOutcome, IngestReceipt};
