//! Front Desk - hotel booking ledger and its HTTP surface
//!
//! # Architecture
//!
//! - **Ledger** (`ledger`): rooms, customers, bookings and payments behind
//!   one lock; every mutation validates first and commits atomically
//! - **Calculators** (`pricing`, `billing`): pure rate and payment-status rules
//! - **Storage** (`storage`): snapshot persistence, redb or in-memory
//! - **HTTP API** (`api`): axum routes over the ledger
//!
//! # Module layout
//!
//! ```text
//! front-desk/src/
//! ├── api/        # HTTP routes and handlers
//! ├── billing/    # money helpers, payment status resolver
//! ├── clock.rs    # time source
//! ├── core/       # config, state, server, errors
//! ├── ledger/     # BookingLedger
//! ├── pricing/    # rate calculator
//! ├── storage/    # LedgerStore adapters
//! └── utils/      # logger, validation
//! ```

pub mod api;
pub mod billing;
pub mod clock;
pub mod core;
pub mod ledger;
pub mod pricing;
pub mod storage;
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use core::{Config, Server, ServerState};
pub use ledger::{BookingLedger, ErrorKind, LedgerError, LedgerResult};
pub use storage::{LedgerStore, MemoryStore, RedbLedgerStore};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, then start logging from `LOG_LEVEL` / `LOG_DIR`
///
/// Must run before [`Config::from_env`] so `.env` values are visible.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ______                 __     ____            __
   / ____/________  ____  / /_   / __ \___  _____/ /__
  / /_  / ___/ __ \/ __ \/ __/  / / / / _ \/ ___/ //_/
 / __/ / /  / /_/ / / / / /_   / /_/ /  __(__  ) ,<
/_/   /_/   \____/_/ /_/\__/  /_____/\___/____/_/|_|
    "#
    );
}
