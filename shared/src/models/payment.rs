//! Payment Model

use serde::{Deserialize, Serialize};

/// Tender used for a payment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentType {
    #[default]
    Cash,
    Card,
    Upi,
    BankTransfer,
}

/// Payment entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    pub id: i64,
    pub booking_id: i64,
    pub amount: f64,
    pub payment_type: PaymentType,
    /// Unix millis
    pub payment_time: i64,
}

/// Record payment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    pub amount: f64,
    #[serde(default)]
    pub payment_type: PaymentType,
}
