//! Customer Model

use serde::{Deserialize, Serialize};

/// Address recorded for walk-in customers who give none
pub const WALK_IN_ADDRESS: &str = "Walk-in customer";

/// Identity document placeholder for walk-ins
pub const IDENTITY_NOT_PROVIDED: &str = "Not provided";

/// Customer entity (immutable once created)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub identity_document: String,
    /// Unix millis
    pub created_at: i64,
}

/// Customer details captured at the desk
///
/// `name`, `phone` and `email` are required; the rest fall back to
/// [`WALK_IN_ADDRESS`] and [`IDENTITY_NOT_PROVIDED`].
///
/// Missing fields deserialize as blank so the ledger reports which one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub identity_document: Option<String>,
}

impl CustomerInput {
    pub fn new(name: impl Into<String>, phone: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: None,
            identity_document: None,
        }
    }
}
