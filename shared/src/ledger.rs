//! Persisted ledger snapshot
//!
//! The full state handed to the persistence port: every collection plus
//! the next-id counters. Adapters treat it as an opaque round-trip value.

use serde::{Deserialize, Serialize};

use crate::models::{Booking, Customer, Payment, Room};

/// Entity kinds that draw ids from [`IdCounters`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Room,
    Customer,
    Booking,
    Payment,
}

/// Next-id counters, one per entity kind
///
/// Ids start at 1 and only ever move forward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IdCounters {
    pub next_room_id: i64,
    pub next_customer_id: i64,
    pub next_booking_id: i64,
    pub next_payment_id: i64,
}

impl Default for IdCounters {
    fn default() -> Self {
        Self {
            next_room_id: 1,
            next_customer_id: 1,
            next_booking_id: 1,
            next_payment_id: 1,
        }
    }
}

impl IdCounters {
    /// Hand out the next id for `kind` and advance its counter
    pub fn allocate(&mut self, kind: IdKind) -> i64 {
        let slot = self.slot_mut(kind);
        let id = *slot;
        *slot += 1;
        id
    }

    /// Push every counter past the largest id already present in `snapshot`
    ///
    /// Guards against snapshots written with stale counters.
    pub fn reconcile(&mut self, snapshot: &LedgerSnapshot) {
        fn bump(slot: &mut i64, max_id: Option<i64>) {
            if let Some(max_id) = max_id
                && *slot <= max_id
            {
                *slot = max_id + 1;
            }
        }
        bump(
            &mut self.next_room_id,
            snapshot.rooms.iter().map(|r| r.id).max(),
        );
        bump(
            &mut self.next_customer_id,
            snapshot.customers.iter().map(|c| c.id).max(),
        );
        bump(
            &mut self.next_booking_id,
            snapshot.bookings.iter().map(|b| b.id).max(),
        );
        bump(
            &mut self.next_payment_id,
            snapshot.payments.iter().map(|p| p.id).max(),
        );
    }

    fn slot_mut(&mut self, kind: IdKind) -> &mut i64 {
        match kind {
            IdKind::Room => &mut self.next_room_id,
            IdKind::Customer => &mut self.next_customer_id,
            IdKind::Booking => &mut self.next_booking_id,
            IdKind::Payment => &mut self.next_payment_id,
        }
    }
}

/// Full ledger state as stored by the persistence port
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
    #[serde(default)]
    pub payments: Vec<Payment>,
    #[serde(flatten)]
    pub counters: IdCounters,
}
