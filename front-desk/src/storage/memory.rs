//! In-memory ledger store

use parking_lot::Mutex;
use shared::ledger::LedgerSnapshot;

use super::{LedgerStore, StorageResult};

/// Keeps the last saved snapshot in process memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: Mutex<Option<LedgerSnapshot>>,
    saves: Mutex<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an already populated snapshot
    pub fn with_snapshot(snapshot: LedgerSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
            saves: Mutex::new(0),
        }
    }

    /// Number of successful `save` calls
    pub fn save_count(&self) -> u64 {
        *self.saves.lock()
    }
}

impl LedgerStore for MemoryStore {
    fn save(&self, snapshot: &LedgerSnapshot) -> StorageResult<()> {
        *self.snapshot.lock() = Some(snapshot.clone());
        *self.saves.lock() += 1;
        Ok(())
    }

    fn load(&self) -> StorageResult<Option<LedgerSnapshot>> {
        Ok(self.snapshot.lock().clone())
    }
}
