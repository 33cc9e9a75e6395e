use super::*;

// ========================================================================
// Happy path
// ========================================================================

#[test]
fn test_walk_in_end_to_end() {
    let ledger = create_test_ledger();

    let booking = ledger
        .create_walk_in_booking(asha(), 1, 2, 2000.0, 500.0)
        .unwrap();

    assert_eq!(booking.total_amount, 2000.0);
    assert_eq!(booking.payment_status, PaymentStatus::Partial);
    assert_eq!(booking.room_id, 1);
    assert_eq!(booking.checkin_time, DAY0);
    assert_eq!(booking.checkout_time, DAY0 + 2 * DAY_MILLIS);
    assert_eq!(booking.source, BookingSource::WalkIn);

    let payments = ledger.payments_for(booking.id);
    assert_eq!(payments.len(), 1);
    assert_eq!(payments[0].amount, 500.0);
    assert_eq!(payments[0].payment_type, PaymentType::Cash);
    assert_eq!(payments[0].payment_time, DAY0);

    assert_eq!(ledger.room(1).unwrap().status, RoomStatus::Occupied);

    let customers = ledger.customers();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0].id, booking.customer_id);
    assert_eq!(customers[0].name, "Asha");
    assert_eq!(ledger.bookings().len(), 1);
}

#[test]
fn test_walk_in_customer_defaults() {
    let ledger = create_test_ledger();
    let booking = ledger
        .create_walk_in_booking(asha(), 1, 1, 1000.0, 0.0)
        .unwrap();

    let customer = ledger.customer(booking.customer_id).unwrap();
    assert_eq!(customer.address, WALK_IN_ADDRESS);
    assert_eq!(customer.identity_document, IDENTITY_NOT_PROVIDED);
    assert_eq!(customer.created_at, DAY0);
}

#[test]
fn test_walk_in_keeps_given_address() {
    let ledger = create_test_ledger();
    let mut input = asha();
    input.address = Some("12 MG Road, Pune".to_string());
    input.identity_document = Some("XXXX-1234".to_string());

    let booking = ledger.create_walk_in_booking(input, 1, 1, 1000.0, 0.0).unwrap();
    let customer = ledger.customer(booking.customer_id).unwrap();
    assert_eq!(customer.address, "12 MG Road, Pune");
    assert_eq!(customer.identity_document, "XXXX-1234");
}

#[test]
fn test_walk_in_without_advance_records_no_payment() {
    let ledger = create_test_ledger();
    let booking = ledger
        .create_walk_in_booking(asha(), 1, 3, 3000.0, 0.0)
        .unwrap();

    assert_eq!(booking.payment_status, PaymentStatus::Pending);
    assert!(ledger.payments_for(booking.id).is_empty());
}

#[test]
fn test_walk_in_full_advance_is_paid() {
    let ledger = create_test_ledger();
    let booking = ledger
        .create_walk_in_booking(asha(), 1, 1, 1000.0, 1000.0)
        .unwrap();
    assert_eq!(booking.payment_status, PaymentStatus::Paid);
}

#[test]
fn test_walk_in_total_may_override_suggestion() {
    let ledger = create_test_ledger();
    // Suggested would be 2000
    let booking = ledger
        .create_walk_in_booking(asha(), 1, 2, 1800.0, 0.0)
        .unwrap();
    assert_eq!(booking.total_amount, 1800.0);
}

#[test]
fn test_walk_in_ids_are_fresh_and_increasing() {
    let desk = create_test_desk();
    for n in 1..=3 {
        desk.ledger
            .add_room(room_input(&format!("10{}", n), 1000.0))
            .unwrap();
    }

    let first = desk
        .ledger
        .create_walk_in_booking(guest(1), 1, 1, 1000.0, 100.0)
        .unwrap();
    let second = desk
        .ledger
        .create_walk_in_booking(guest(2), 2, 1, 1000.0, 100.0)
        .unwrap();

    assert!(second.id > first.id);
    assert!(second.customer_id > first.customer_id);
    let p1 = &desk.ledger.payments_for(first.id)[0];
    let p2 = &desk.ledger.payments_for(second.id)[0];
    assert!(p2.id > p1.id);
}

#[test]
fn test_walk_in_persists_after_commit() {
    let desk = create_test_desk();
    desk.ledger.add_room(room_input("101", 1000.0)).unwrap();
    let saves_before = desk.store.save_count();

    desk.ledger
        .create_walk_in_booking(asha(), 1, 1, 1000.0, 0.0)
        .unwrap();

    assert_eq!(desk.store.save_count(), saves_before + 1);
    let saved = desk.store.load().unwrap().unwrap();
    assert_eq!(saved.bookings.len(), 1);
    assert_eq!(saved.rooms[0].status, RoomStatus::Occupied);
}

// ========================================================================
// Rejections: each leaves the ledger untouched
// ========================================================================

#[test]
fn test_walk_in_occupied_room_conflicts() {
    let ledger = create_test_ledger();
    ledger
        .create_walk_in_booking(guest(1), 1, 1, 1000.0, 0.0)
        .unwrap();
    let before = counts(&ledger);

    let err = ledger
        .create_walk_in_booking(guest(2), 1, 1, 1000.0, 200.0)
        .unwrap_err();

    assert!(matches!(err, LedgerError::RoomNotVacant { room_id: 1, .. }));
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert_eq!(counts(&ledger), before);
}

#[test]
fn test_walk_in_unknown_room() {
    let ledger = create_test_ledger();
    let err = ledger
        .create_walk_in_booking(asha(), 99, 1, 1000.0, 0.0)
        .unwrap_err();
    assert_eq!(err, LedgerError::RoomNotFound(99));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_walk_in_missing_customer_fields() {
    let ledger = create_test_ledger();
    let before = counts(&ledger);

    let mut no_name = asha();
    no_name.name = "  ".to_string();
    assert_eq!(
        ledger.create_walk_in_booking(no_name, 1, 1, 1000.0, 0.0),
        Err(LedgerError::MissingCustomerField("name"))
    );

    let mut no_phone = asha();
    no_phone.phone = String::new();
    assert_eq!(
        ledger.create_walk_in_booking(no_phone, 1, 1, 1000.0, 0.0),
        Err(LedgerError::MissingCustomerField("phone"))
    );

    let mut no_email = asha();
    no_email.email = String::new();
    assert_eq!(
        ledger.create_walk_in_booking(no_email, 1, 1, 1000.0, 0.0),
        Err(LedgerError::MissingCustomerField("email"))
    );

    assert_eq!(counts(&ledger), before);
    assert!(ledger.room(1).unwrap().status.is_vacant());
}

#[test]
fn test_walk_in_non_positive_days() {
    let ledger = create_test_ledger();
    assert_eq!(
        ledger.create_walk_in_booking(asha(), 1, 0, 1000.0, 0.0),
        Err(LedgerError::Rate(RateError::InvalidDays(0)))
    );
    assert!(ledger.customers().is_empty());
}

#[test]
fn test_walk_in_non_positive_total() {
    let ledger = create_test_ledger();
    let err = ledger
        .create_walk_in_booking(asha(), 1, 1, 0.0, 0.0)
        .unwrap_err();
    assert_eq!(err, LedgerError::Resolve(ResolveError::NonPositiveTotal(0.0)));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn test_walk_in_sub_cent_total_rejected() {
    let ledger = create_test_ledger();
    let before = counts(&ledger);
    assert_eq!(
        ledger.create_walk_in_booking(asha(), 1, 1, 0.004, 0.0),
        Err(LedgerError::Resolve(ResolveError::NonPositiveTotal(0.004)))
    );
    assert_eq!(counts(&ledger), before);
    assert_eq!(ledger.room(1).unwrap().status, RoomStatus::Vacant);
}

#[test]
fn test_walk_in_negative_advance() {
    let ledger = create_test_ledger();
    assert_eq!(
        ledger.create_walk_in_booking(asha(), 1, 1, 1000.0, -50.0),
        Err(LedgerError::Resolve(ResolveError::NegativeAdvance(-50.0)))
    );
}

#[test]
fn test_walk_in_advance_over_total() {
    let ledger = create_test_ledger();
    let before = counts(&ledger);
    assert!(matches!(
        ledger.create_walk_in_booking(asha(), 1, 1, 1000.0, 1200.0),
        Err(LedgerError::Resolve(ResolveError::InvalidAdvance { .. }))
    ));
    assert_eq!(counts(&ledger), before);
}

#[test]
fn test_ledger_usable_after_rejection() {
    let ledger = create_test_ledger();
    ledger
        .create_walk_in_booking(asha(), 1, 1, 1000.0, 1200.0)
        .unwrap_err();

    let booking = ledger
        .create_walk_in_booking(asha(), 1, 1, 1000.0, 200.0)
        .unwrap();
    // First ids are still handed out: the rejection consumed nothing
    assert_eq!(booking.id, 1);
    assert_eq!(booking.customer_id, 1);
}

// ========================================================================
// Available rooms
// ========================================================================

#[test]
fn test_available_rooms_reflects_bookings() {
    let desk = create_test_desk();
    for number in ["101", "102", "103"] {
        desk.ledger.add_room(room_input(number, 1000.0)).unwrap();
    }

    let ids: Vec<i64> = desk.ledger.available_rooms().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    desk.ledger
        .create_walk_in_booking(asha(), 2, 1, 1000.0, 0.0)
        .unwrap();

    let ids: Vec<i64> = desk.ledger.available_rooms().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_available_rooms_is_repeatable() {
    let desk = create_test_desk();
    desk.ledger.seed_standard_rooms().unwrap();
    desk.ledger
        .create_walk_in_booking(asha(), 5, 1, 1500.0, 0.0)
        .unwrap();

    assert_eq!(desk.ledger.available_rooms(), desk.ledger.available_rooms());
    assert_eq!(desk.ledger.available_rooms().len(), 23);
}

// ========================================================================
// Preview
// ========================================================================

#[test]
fn test_preview_walk_in_uses_current_rate() {
    let desk = create_test_desk();
    desk.ledger.add_room(room_input("101", 1000.0)).unwrap();

    let preview = desk.ledger.preview_walk_in(1, 2, None, 500.0).unwrap();
    assert_eq!(preview.suggested_amount, 2000.0);
    assert_eq!(preview.total_amount, 2000.0);
    assert_eq!(preview.pending_amount, 1500.0);
    assert_eq!(preview.payment_status, PaymentStatus::Partial);
    assert_eq!(preview.checkout_time, DAY0 + 2 * DAY_MILLIS);
    assert!(preview.room_available);

    // Preview never mutates
    assert_eq!(counts(&desk.ledger), (1, 0, 0, 0));
    assert_eq!(desk.store.save_count(), 1);
}

#[test]
fn test_preview_walk_in_with_override_and_errors() {
    let ledger = create_test_ledger();

    let preview = ledger.preview_walk_in(1, 2, Some(1800.0), 1800.0).unwrap();
    assert_eq!(preview.suggested_amount, 2000.0);
    assert_eq!(preview.total_amount, 1800.0);
    assert_eq!(preview.payment_status, PaymentStatus::Paid);

    assert_eq!(
        ledger.preview_walk_in(1, 0, None, 0.0),
        Err(LedgerError::Rate(RateError::InvalidDays(0)))
    );
    assert_eq!(
        ledger.preview_walk_in(7, 1, None, 0.0),
        Err(LedgerError::RoomNotFound(7))
    );
}

#[test]
fn test_quote_for_days_starts_now() {
    let desk = create_test_desk();
    desk.ledger.add_room(room_input("101", 2500.0)).unwrap();
    desk.clock.set(DAY0 + 3_600_000);

    let quote = desk.ledger.quote_for_days(1, 2, 3).unwrap();
    assert_eq!(quote.checkin_time, DAY0 + 3_600_000);
    assert_eq!(quote.days, 2);
    assert_eq!(quote.suggested_total, 6000.0);
}
