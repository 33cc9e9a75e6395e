//! In-memory ledger state
//!
//! Plain collections guarded by the ledger's mutex. Lookups only; every
//! mutation goes through `BookingLedger`.

use shared::ledger::{IdCounters, IdKind, LedgerSnapshot};
use shared::models::{Booking, Customer, Payment, Room};

use crate::billing::money::sum_money;

#[derive(Debug, Clone, Default)]
pub(crate) struct LedgerState {
    pub rooms: Vec<Room>,
    pub customers: Vec<Customer>,
    pub bookings: Vec<Booking>,
    pub payments: Vec<Payment>,
    pub counters: IdCounters,
}

impl LedgerState {
    pub fn from_snapshot(snapshot: LedgerSnapshot) -> Self {
        let mut counters = snapshot.counters;
        counters.reconcile(&snapshot);

        let LedgerSnapshot {
            mut rooms,
            customers,
            bookings,
            payments,
            ..
        } = snapshot;
        rooms.sort_by_key(|r| r.id);

        Self {
            rooms,
            customers,
            bookings,
            payments,
            counters,
        }
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        LedgerSnapshot {
            rooms: self.rooms.clone(),
            customers: self.customers.clone(),
            bookings: self.bookings.clone(),
            payments: self.payments.clone(),
            counters: self.counters,
        }
    }

    pub fn allocate(&mut self, kind: IdKind) -> i64 {
        self.counters.allocate(kind)
    }

    pub fn room(&self, id: i64) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn room_mut(&mut self, id: i64) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id == id)
    }

    pub fn customer(&self, id: i64) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    pub fn customer_by_phone(&self, phone: &str) -> Option<&Customer> {
        let phone = phone.trim();
        self.customers.iter().find(|c| c.phone == phone)
    }

    pub fn booking(&self, id: i64) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    pub fn booking_mut(&mut self, id: i64) -> Option<&mut Booking> {
        self.bookings.iter_mut().find(|b| b.id == id)
    }

    pub fn payments_for(&self, booking_id: i64) -> impl Iterator<Item = &Payment> {
        self.payments.iter().filter(move |p| p.booking_id == booking_id)
    }

    /// Sum of recorded payments for a booking
    pub fn paid_for(&self, booking_id: i64) -> f64 {
        sum_money(self.payments_for(booking_id).map(|p| p.amount))
    }
}
