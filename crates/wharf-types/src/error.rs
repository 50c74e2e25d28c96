use thiserror::Error;

/// Errors produced by type validation and parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid workspace address {address:?}: {reason}")]
    InvalidWorkspaceAddress { address: String, reason: String },

    #[error("invalid author address {address:?}: {reason}")]
    InvalidAuthorAddress { address: String, reason: String },

    #[error("invalid document: {0}")]
    InvalidDocument(String),
}
