//! Data models
//!
//! Shared between the ledger core and its HTTP surface.
//! All IDs are `i64`, all timestamps are Unix millis (UTC).

pub mod booking;
pub mod customer;
pub mod payment;
pub mod room;

// Re-exports
pub use booking::*;
pub use customer::*;
pub use payment::*;
pub use room::*;
