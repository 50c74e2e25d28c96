use thiserror::Error;

/// Errors produced by the workspace core.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The workspace is not registered, or could not be created. Callers
    /// must not be able to tell the two apart; backend detail stays in
    /// the server log.
    #[error("workspace not found: {0}")]
    WorkspaceNotFound(String),

    #[error("store error: {0}")]
    Store(#[from] wharf_store::StoreError),
}

pub type CoreResult<T> = Result<T, CoreError>;
