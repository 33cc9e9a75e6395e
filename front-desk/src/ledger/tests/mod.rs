use super::*;
use crate::clock::FixedClock;
use shared::models::RoomType;

mod test_reports;
mod test_walk_in;

/// 2026-01-01T00:00:00Z
const DAY0: i64 = 1_767_225_600_000;

struct TestDesk {
    ledger: BookingLedger,
    clock: Arc<FixedClock>,
    store: Arc<MemoryStore>,
}

fn create_test_desk() -> TestDesk {
    let clock = Arc::new(FixedClock::new(DAY0));
    let store = Arc::new(MemoryStore::new());
    let ledger = BookingLedger::new(store.clone(), clock.clone());
    TestDesk {
        ledger,
        clock,
        store,
    }
}

/// Ledger with a single Vacant room: id 1, "101", 1000/day
fn create_test_ledger() -> BookingLedger {
    let desk = create_test_desk();
    desk.ledger.add_room(room_input("101", 1000.0)).unwrap();
    desk.ledger
}

fn room_input(number: &str, price: f64) -> RoomCreate {
    RoomCreate {
        room_number: number.to_string(),
        room_type: RoomType::Single,
        price,
        floor: Some(1),
        capacity: Some(1),
        amenities: vec!["WiFi".to_string()],
    }
}

fn asha() -> CustomerInput {
    CustomerInput::new("Asha", "9876543210", "asha@example.com")
}

fn guest(n: usize) -> CustomerInput {
    CustomerInput::new(
        format!("Guest {}", n),
        format!("90000000{:02}", n),
        format!("guest{}@example.com", n),
    )
}

/// Counts of every collection, for "nothing changed" assertions
fn counts(ledger: &BookingLedger) -> (usize, usize, usize, usize) {
    let s = ledger.snapshot();
    (
        s.rooms.len(),
        s.customers.len(),
        s.bookings.len(),
        s.payments.len(),
    )
}

// ========================================================================
// Helper: register a customer and book a reservation
// ========================================================================

fn reserve(
    ledger: &BookingLedger,
    customer_id: i64,
    room_id: i64,
    nights: i64,
    total: f64,
    advance: f64,
) -> LedgerResult<Booking> {
    ledger.create_reservation(ReservationRequest {
        customer_id,
        room_id,
        checkin_time: DAY0 + DAY_MILLIS,
        checkout_time: DAY0 + (1 + nights) * DAY_MILLIS,
        guest_count: 2,
        total_amount: total,
        advance_amount: advance,
        payment_type: PaymentType::Upi,
    })
}
