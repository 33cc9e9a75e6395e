//! Booking Model

use serde::{Deserialize, Serialize};

use super::customer::CustomerInput;
use super::payment::PaymentType;

/// Payment status of a booking, derived from total and payments received
///
/// Mutually exclusive categories, not an ordering.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Partial,
    Paid,
}

/// How the booking entered the ledger
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum BookingSource {
    #[default]
    WalkIn,
    Reservation,
}

/// Booking entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: i64,
    pub customer_id: i64,
    pub room_id: i64,
    /// Unix millis
    pub checkin_time: i64,
    /// Unix millis, strictly after `checkin_time`
    pub checkout_time: i64,
    pub total_amount: f64,
    pub payment_status: PaymentStatus,
    #[serde(default = "default_guest_count")]
    pub guest_count: i32,
    #[serde(default)]
    pub source: BookingSource,
    #[serde(default)]
    pub created_at: i64,
}

fn default_guest_count() -> i32 {
    1
}

/// Walk-in booking request (customer created on the spot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkInRequest {
    pub customer: CustomerInput,
    pub room_id: i64,
    pub days: i64,
    pub total_amount: f64,
    #[serde(default)]
    pub advance_amount: f64,
}

/// Reservation request for a registered customer over an explicit range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub customer_id: i64,
    pub room_id: i64,
    pub checkin_time: i64,
    pub checkout_time: i64,
    #[serde(default = "default_guest_count")]
    pub guest_count: i32,
    pub total_amount: f64,
    #[serde(default)]
    pub advance_amount: f64,
    #[serde(default)]
    pub payment_type: PaymentType,
}

/// Amounts owed on a booking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PaymentSummary {
    pub total: f64,
    pub paid: f64,
    pub pending: f64,
    pub status: PaymentStatus,
}
