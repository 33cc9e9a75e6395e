use super::*;

#[test]
fn test_dashboard_on_empty_ledger() {
    let desk = create_test_desk();
    let summary = desk.ledger.dashboard();
    assert_eq!(summary.total_rooms, 0);
    assert_eq!(summary.occupancy_rate, 0);
    assert_eq!(summary.pending_balance, 0.0);
}

#[test]
fn test_dashboard_figures() {
    let desk = create_test_desk();
    desk.ledger.seed_standard_rooms().unwrap();

    // Room 1 ("101", 1500/day): two days, part paid
    desk.ledger
        .create_walk_in_booking(guest(1), 1, 2, 3000.0, 1000.0)
        .unwrap();
    // Room 9 ("201", 2500/day): one day, fully paid
    desk.ledger
        .create_walk_in_booking(guest(2), 9, 1, 2500.0, 2500.0)
        .unwrap();
    // Room 17 ("301"): reservation starting tomorrow, nothing paid
    let customer = desk.ledger.register_customer(guest(3)).unwrap();
    reserve(&desk.ledger, customer.id, 17, 2, 7000.0, 0.0).unwrap();

    let summary = desk.ledger.dashboard();
    assert_eq!(summary.total_rooms, 24);
    assert_eq!(summary.vacant_rooms, 21);
    assert_eq!(summary.occupied_rooms, 3);
    // 3 / 24 = 12.5%
    assert_eq!(summary.occupancy_rate, 13);
    assert_eq!(summary.total_revenue, 3500.0);
    assert_eq!(summary.pending_balance, 9000.0);
    assert_eq!(summary.total_customers, 3);
    assert_eq!(summary.total_bookings, 3);
    assert_eq!(summary.paid_bookings, 1);
    assert_eq!(summary.checkins_today, 2);
    assert_eq!(summary.total_guests, 4);
    assert_eq!(summary.average_booking_value, 1166.67);
}

#[test]
fn test_dashboard_tracks_later_payments() {
    let ledger = create_test_ledger();
    let booking = ledger
        .create_walk_in_booking(asha(), 1, 1, 1000.0, 400.0)
        .unwrap();
    assert_eq!(ledger.dashboard().pending_balance, 600.0);

    ledger
        .record_payment(booking.id, 600.0, PaymentType::Card)
        .unwrap();
    let summary = ledger.dashboard();
    assert_eq!(summary.pending_balance, 0.0);
    assert_eq!(summary.total_revenue, 1000.0);
    assert_eq!(summary.paid_bookings, 1);
}

#[test]
fn test_checkins_today_follows_clock() {
    let desk = create_test_desk();
    desk.ledger.add_room(room_input("101", 1000.0)).unwrap();
    desk.ledger
        .create_walk_in_booking(asha(), 1, 1, 1000.0, 0.0)
        .unwrap();
    assert_eq!(desk.ledger.dashboard().checkins_today, 1);

    desk.clock.advance(DAY_MILLIS);
    assert_eq!(desk.ledger.dashboard().checkins_today, 0);
}
