//! Shared types for the front-desk ledger
//!
//! Data models, the persisted ledger snapshot and the unified error
//! codes used by the ledger core and its HTTP surface.

pub mod error;
pub mod ledger;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use ledger::{IdCounters, LedgerSnapshot};
