use thiserror::Error;

use crate::storage::StorageError;

/// Startup and serving failures
///
/// Request-level failures are `AppError`s; these stop the server.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to prepare work directory {path}: {source}")]
    WorkDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Ledger storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] crate::ledger::LedgerError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result alias for server lifecycle code
pub type Result<T> = std::result::Result<T, ServerError>;
