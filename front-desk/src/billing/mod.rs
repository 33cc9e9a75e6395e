//! Billing - money arithmetic and payment status resolution
//!
//! - [`money`] - Decimal-backed rounding and comparison helpers
//! - [`resolver`] - total + paid → [`PaymentStatus`](shared::models::PaymentStatus) + pending

pub mod money;
pub mod resolver;

pub use resolver::{Resolution, ResolveError, resolve, resolve_paid};
