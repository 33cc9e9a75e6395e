//! Read-only views over the ledger: dashboard figures, payment history and
//! booking previews

use chrono::{DateTime, Utc};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::{Payment, PaymentStatus, RoomStatus};

use super::state::LedgerState;
use crate::billing::money::{sum_money, to_decimal, to_f64};

/// Front-desk dashboard figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_rooms: usize,
    pub vacant_rooms: usize,
    pub occupied_rooms: usize,
    /// Occupied share of all rooms, whole percent
    pub occupancy_rate: u32,
    /// Sum of every recorded payment
    pub total_revenue: f64,
    /// Outstanding on Pending and Partial bookings
    pub pending_balance: f64,
    pub total_customers: usize,
    pub total_bookings: usize,
    pub paid_bookings: usize,
    /// Bookings whose check-in falls on the current UTC day
    pub checkins_today: usize,
    pub total_guests: i64,
    pub average_booking_value: f64,
}

/// Every recorded payment with its count and sum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentHistory {
    pub count: usize,
    pub total: f64,
    /// In recording order
    pub payments: Vec<Payment>,
}

impl PaymentHistory {
    pub fn new(payments: Vec<Payment>) -> Self {
        Self {
            count: payments.len(),
            total: sum_money(payments.iter().map(|p| p.amount)),
            payments,
        }
    }
}

/// Side-effect-free walk-in preview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPreview {
    pub room_id: i64,
    pub room_number: String,
    pub room_available: bool,
    pub days: i64,
    pub rate: f64,
    pub suggested_amount: f64,
    pub total_amount: f64,
    pub advance_amount: f64,
    pub pending_amount: f64,
    pub payment_status: PaymentStatus,
    pub checkin_time: i64,
    pub checkout_time: i64,
}

pub(crate) fn dashboard(state: &LedgerState, now_millis: i64) -> DashboardSummary {
    let total_rooms = state.rooms.len();
    let vacant_rooms = state
        .rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Vacant)
        .count();
    let occupied_rooms = state
        .rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Occupied)
        .count();

    let total_revenue = sum_money(state.payments.iter().map(|p| p.amount));
    let pending_balance = sum_money(
        state
            .bookings
            .iter()
            .filter(|b| b.payment_status != PaymentStatus::Paid)
            .map(|b| outstanding(b.total_amount, state.paid_for(b.id))),
    );

    let total_bookings = state.bookings.len();
    let paid_bookings = state
        .bookings
        .iter()
        .filter(|b| b.payment_status == PaymentStatus::Paid)
        .count();
    let total_guests = state
        .bookings
        .iter()
        .map(|b| i64::from(b.guest_count))
        .sum();

    let (day_start, day_end) = utc_day_bounds(now_millis);
    let checkins_today = state
        .bookings
        .iter()
        .filter(|b| (day_start..day_end).contains(&b.checkin_time))
        .count();

    DashboardSummary {
        total_rooms,
        vacant_rooms,
        occupied_rooms,
        occupancy_rate: percent(occupied_rooms, total_rooms),
        total_revenue,
        pending_balance,
        total_customers: state.customers.len(),
        total_bookings,
        paid_bookings,
        checkins_today,
        total_guests,
        average_booking_value: average(total_revenue, total_bookings),
    }
}

fn outstanding(total: f64, paid: f64) -> f64 {
    to_f64((to_decimal(total) - to_decimal(paid)).max(Decimal::ZERO))
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or_default()
}

fn average(sum: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    to_f64(to_decimal(sum) / Decimal::from(count))
}

/// `[start, end)` of the UTC day containing `now_millis`
fn utc_day_bounds(now_millis: i64) -> (i64, i64) {
    let day_start = DateTime::<Utc>::from_timestamp_millis(now_millis)
        .and_then(|dt| dt.date_naive().and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
        .unwrap_or(now_millis);
    (day_start, day_start + crate::clock::DAY_MILLIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(24, 24), 100);
    }

    #[test]
    fn test_utc_day_bounds() {
        // 2026-01-01T15:30:00Z
        let now = 1_767_225_600_000 + 15 * 3_600_000 + 30 * 60_000;
        assert_eq!(
            utc_day_bounds(now),
            (1_767_225_600_000, 1_767_225_600_000 + 86_400_000)
        );
    }

    #[test]
    fn test_empty_dashboard() {
        let summary = dashboard(&LedgerState::default(), 0);
        assert_eq!(summary.total_rooms, 0);
        assert_eq!(summary.occupancy_rate, 0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.average_booking_value, 0.0);
    }
}
