//! redb-backed ledger store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `ledger` | `"snapshot"` | JSON `LedgerSnapshot` | Whole ledger state |
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate` by default: once `commit()`
//! returns the snapshot survives a crash, and the file is never left
//! half-written (copy-on-write with an atomic root swap).

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::ledger::LedgerSnapshot;

use super::{LedgerStore, StorageResult};

/// Table holding the ledger snapshot: key = fixed name, value = JSON bytes
const LEDGER_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("ledger");

const SNAPSHOT_KEY: &str = "snapshot";

/// Ledger store backed by a redb file
#[derive(Clone)]
pub struct RedbLedgerStore {
    db: Arc<Database>,
}

impl RedbLedgerStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LEDGER_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl LedgerStore for RedbLedgerStore {
    fn save(&self, snapshot: &LedgerSnapshot) -> StorageResult<()> {
        let value = serde_json::to_vec(snapshot)?;

        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(LEDGER_TABLE)?;
            table.insert(SNAPSHOT_KEY, value.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn load(&self) -> StorageResult<Option<LedgerSnapshot>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(LEDGER_TABLE)?;

        match table.get(SNAPSHOT_KEY)? {
            Some(value) => {
                let snapshot: LedgerSnapshot = serde_json::from_slice(value.value())?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }
}
