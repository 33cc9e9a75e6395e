//! Persistence port for the booking ledger
//!
//! The ledger hands a full [`LedgerSnapshot`] to a [`LedgerStore`] after
//! every committed mutation and asks for one back on startup.
//!
//! | Adapter | Backing | Use |
//! |---------|---------|-----|
//! | [`MemoryStore`] | in-process `Mutex` | tests, ephemeral runs |
//! | [`RedbLedgerStore`] | redb file | the server |
//!
//! Contract: `load()` after `save(x)` returns a snapshot equal to `x`.

mod memory;
mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbLedgerStore;

use shared::ledger::LedgerSnapshot;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Load/save port for the whole ledger state
pub trait LedgerStore: Send + Sync {
    /// Persist the snapshot, replacing whatever was stored before
    fn save(&self, snapshot: &LedgerSnapshot) -> StorageResult<()>;

    /// Last saved snapshot, or `None` if nothing was ever saved
    fn load(&self) -> StorageResult<Option<LedgerSnapshot>>;
}
