use thiserror::Error;

/// Errors produced by document store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid document: {0}")]
    InvalidDocument(#[from] wharf_types::TypeError),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
