use std::path::PathBuf;
use std::sync::Arc;

use crate::clock::SystemClock;
use crate::core::{Config, Result, ServerError};
use crate::ledger::BookingLedger;
use crate::storage::RedbLedgerStore;

/// Server state shared by every handler
///
/// Cheap to clone: the ledger sits behind an `Arc`.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | configuration (immutable) |
/// | ledger | Arc<BookingLedger> | the booking ledger |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub ledger: Arc<BookingLedger>,
}

impl ServerState {
    /// Wrap an existing ledger
    ///
    /// Tests use this with an in-memory ledger.
    pub fn with_ledger(config: Config, ledger: Arc<BookingLedger>) -> Self {
        Self { config, ledger }
    }

    /// Initialize server state
    ///
    /// In order:
    /// 1. work directory (created if missing)
    /// 2. redb ledger store at `work_dir/ledger_db`
    /// 3. ledger restored from the store
    /// 4. standard room inventory, when enabled and the ledger is empty
    pub fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir).map_err(|source| ServerError::WorkDir {
            path: config.work_dir.clone(),
            source,
        })?;

        let db_path = config.ledger_db_path();
        tracing::info!(path = %db_path.display(), "Opening ledger database");
        let store = Arc::new(RedbLedgerStore::open(&db_path)?);
        let ledger = BookingLedger::load(store, Arc::new(SystemClock))?;

        if config.seed_rooms {
            let seeded = ledger.seed_standard_rooms()?;
            if !seeded.is_empty() {
                tracing::info!(count = seeded.len(), "Standard room inventory created");
            }
        }

        Ok(Self::with_ledger(config.clone(), Arc::new(ledger)))
    }

    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }
}
