//! Rate Calculator
//!
//! Suggested charges from a room's current rate and the length of stay.
//! Uses rust_decimal for the arithmetic, returns f64 rounded to 2 places.
//!
//! The rate is read from the room at call time; nothing is locked, so a
//! caller committing a booking re-fetches the room first.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::Room;
use thiserror::Error;

use crate::billing::money::{to_decimal, to_f64};
use crate::clock::DAY_MILLIS;

/// Guests included in the room rate
pub const INCLUDED_GUESTS: i32 = 2;

/// Surcharge per extra guest, per day
pub const EXTRA_GUEST_CHARGE: f64 = 500.0;

/// Rejections from the rate calculator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    #[error("Number of days must be at least 1, got {0}")]
    InvalidDays(i64),

    #[error("Check-out must be after check-in")]
    InvalidRange { checkin: i64, checkout: i64 },

    #[error("Guest count must be at least 1, got {0}")]
    InvalidGuestCount(i32),
}

/// Side-effect-free rate preview for a room and stay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateQuote {
    pub room_id: i64,
    pub days: i64,
    pub guest_count: i32,
    /// Standard rate per day at the time of the quote
    pub rate: f64,
    /// `days * rate`
    pub base_amount: f64,
    pub extra_guest_charge: f64,
    pub suggested_total: f64,
    pub checkin_time: i64,
    pub checkout_time: i64,
}

/// Whole days covered by a stay, rounding partial days up
///
/// `checkout <= checkin` is an error, never clamped to one day.
pub fn days_between(checkin: i64, checkout: i64) -> Result<i64, RateError> {
    let span = checkout.saturating_sub(checkin);
    if span <= 0 {
        return Err(RateError::InvalidRange { checkin, checkout });
    }
    Ok((span - 1) / DAY_MILLIS + 1)
}

/// `days * room.price`
pub fn suggested_amount(room: &Room, days: i64) -> Result<f64, RateError> {
    Ok(to_f64(base_amount(room, days)?))
}

/// Suggested amount including the extra-guest surcharge
pub fn suggested_amount_for_guests(
    room: &Room,
    days: i64,
    guest_count: i32,
) -> Result<f64, RateError> {
    let base = base_amount(room, days)?;
    let surcharge = extra_guest_amount(days, guest_count)?;
    Ok(to_f64(base + surcharge))
}

/// Full quote for a room over `[checkin, checkout)`
pub fn quote(
    room: &Room,
    checkin: i64,
    checkout: i64,
    guest_count: i32,
) -> Result<RateQuote, RateError> {
    let days = days_between(checkin, checkout)?;
    let suggested_total = suggested_amount_for_guests(room, days, guest_count)?;
    let base = suggested_amount(room, days)?;

    Ok(RateQuote {
        room_id: room.id,
        days,
        guest_count,
        rate: room.price,
        base_amount: base,
        extra_guest_charge: to_f64(to_decimal(suggested_total) - to_decimal(base)),
        suggested_total,
        checkin_time: checkin,
        checkout_time: checkout,
    })
}

fn base_amount(room: &Room, days: i64) -> Result<Decimal, RateError> {
    if days < 1 {
        return Err(RateError::InvalidDays(days));
    }
    Ok(to_decimal(room.price) * Decimal::from(days))
}

fn extra_guest_amount(days: i64, guest_count: i32) -> Result<Decimal, RateError> {
    if guest_count < 1 {
        return Err(RateError::InvalidGuestCount(guest_count));
    }
    let extra = (guest_count - INCLUDED_GUESTS).max(0);
    Ok(to_decimal(EXTRA_GUEST_CHARGE) * Decimal::from(extra) * Decimal::from(days))
}
