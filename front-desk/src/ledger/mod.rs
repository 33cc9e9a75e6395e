//! Booking Ledger
//!
//! Owns rooms, customers, bookings and payments, and is the only place
//! they change.
//!
//! # Operations
//!
//! | Operation | Effect |
//! |-----------|--------|
//! | `create_walk_in_booking` | new customer + booking (+ advance payment), room → Occupied |
//! | `create_reservation` | booking for a registered customer over a date range |
//! | `register_customer` | new customer, phone must be unique |
//! | `record_payment` | payment against a booking, status recomputed |
//! | `add_room` / `seed_standard_rooms` | room inventory |
//!
//! # Concurrency
//!
//! Every mutation runs inside one `parking_lot::Mutex` section, from
//! validation through id allocation to the room status change, so two
//! callers can never both see a room Vacant and both book it. Each
//! operation validates everything before touching state: a rejected call
//! commits nothing.
//!
//! Persistence happens after the in-memory commit, outside the state lock.
//! A failed save is logged and does not undo the commit.

mod error;
pub mod reports;
pub mod seed;
mod state;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, LedgerError, LedgerResult};
pub use reports::{BookingPreview, DashboardSummary, PaymentHistory};

use std::sync::Arc;

use parking_lot::Mutex;
use shared::ledger::{IdKind, LedgerSnapshot};
use shared::models::{
    Booking, BookingSource, Customer, CustomerInput, IDENTITY_NOT_PROVIDED, Payment,
    PaymentStatus, PaymentSummary, PaymentType, ReservationRequest, Room, RoomCreate, RoomEvent,
    RoomStatus, WALK_IN_ADDRESS,
};

use crate::billing::money::{is_valid_amount, round_money, sum_money, to_decimal, to_f64};
use crate::billing::{ResolveError, resolve, resolve_paid};
use crate::clock::{Clock, DAY_MILLIS, SystemClock};
use crate::pricing::{self, RateError, RateQuote};
use crate::storage::{LedgerStore, MemoryStore, StorageResult};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_AMENITY_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN,
    validate_max_len, validate_optional_text, validate_required_text,
};
use state::LedgerState;

/// Shortest customer search query that matches anything
pub const MIN_SEARCH_LEN: usize = 2;

/// The front-desk booking ledger
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct BookingLedger {
    state: Mutex<LedgerState>,
    /// Serializes saves so the store never goes back to an older snapshot
    persist_lock: Mutex<()>,
    store: Arc<dyn LedgerStore>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for BookingLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        f.debug_struct("BookingLedger")
            .field("rooms", &state.rooms.len())
            .field("customers", &state.customers.len())
            .field("bookings", &state.bookings.len())
            .field("payments", &state.payments.len())
            .finish()
    }
}

impl BookingLedger {
    /// Empty ledger on top of `store`
    pub fn new(store: Arc<dyn LedgerStore>, clock: Arc<dyn Clock>) -> Self {
        Self::from_state(LedgerState::default(), store, clock)
    }

    /// Ledger restored from whatever `store` last saved
    ///
    /// Id counters resume past the largest id already present.
    pub fn load(store: Arc<dyn LedgerStore>, clock: Arc<dyn Clock>) -> StorageResult<Self> {
        let state = match store.load()? {
            Some(snapshot) => {
                let state = LedgerState::from_snapshot(snapshot);
                tracing::info!(
                    rooms = state.rooms.len(),
                    customers = state.customers.len(),
                    bookings = state.bookings.len(),
                    payments = state.payments.len(),
                    "Ledger restored from storage"
                );
                state
            }
            None => {
                tracing::info!("No saved ledger found, starting empty");
                LedgerState::default()
            }
        };
        Ok(Self::from_state(state, store, clock))
    }

    /// Ephemeral ledger (memory store, system clock)
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(SystemClock))
    }

    fn from_state(state: LedgerState, store: Arc<dyn LedgerStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(state),
            persist_lock: Mutex::new(()),
            store,
            clock,
        }
    }

    // ========== Room inventory ==========

    /// Add a room to the inventory (Vacant)
    pub fn add_room(&self, input: RoomCreate) -> LedgerResult<Room> {
        let room = {
            let mut state = self.state.lock();
            Self::insert_room(&mut state, input)
        }
        .inspect_err(|e| tracing::warn!(error = %e, "Room rejected"))?;

        tracing::info!(room_id = room.id, room_number = %room.room_number, "Room added");
        self.persist();
        Ok(room)
    }

    /// Seed the standard 24-room inventory when the ledger has no rooms
    ///
    /// Returns the rooms created; empty when rooms already exist.
    pub fn seed_standard_rooms(&self) -> LedgerResult<Vec<Room>> {
        let created = {
            let mut state = self.state.lock();
            if !state.rooms.is_empty() {
                return Ok(Vec::new());
            }
            let mut staged = state.clone();
            let mut created = Vec::new();
            for input in seed::standard_rooms() {
                created.push(Self::insert_room(&mut staged, input)?);
            }
            *state = staged;
            created
        };

        tracing::info!(count = created.len(), "Seeded standard room inventory");
        self.persist();
        Ok(created)
    }

    fn insert_room(state: &mut LedgerState, input: RoomCreate) -> LedgerResult<Room> {
        let room_number = input.room_number.trim().to_string();
        if room_number.is_empty() {
            return Err(LedgerError::MissingRoomNumber);
        }
        validate_max_len(&room_number, "room_number", MAX_SHORT_TEXT_LEN)?;
        if !is_valid_amount(input.price) || round_money(input.price) <= 0.0 {
            return Err(LedgerError::InvalidRoomPrice(input.price));
        }
        let amenities: Vec<String> = input
            .amenities
            .iter()
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .collect();
        for amenity in &amenities {
            validate_max_len(amenity, "amenity", MAX_AMENITY_LEN)?;
        }
        if state.rooms.iter().any(|r| r.room_number == room_number) {
            return Err(LedgerError::DuplicateRoomNumber(room_number));
        }

        let room = Room {
            id: state.allocate(IdKind::Room),
            room_number,
            room_type: input.room_type,
            price: round_money(input.price),
            status: RoomStatus::Vacant,
            floor: input.floor.unwrap_or_default(),
            capacity: input.capacity.unwrap_or(1).max(1),
            amenities,
        };
        state.rooms.push(room.clone());
        Ok(room)
    }

    // ========== Bookings ==========

    /// Book a Vacant room for a customer created on the spot
    ///
    /// Check-in is now, check-out `days` later. A positive advance is
    /// recorded as a Cash payment. Any rejection commits nothing.
    pub fn create_walk_in_booking(
        &self,
        customer: CustomerInput,
        room_id: i64,
        days: i64,
        total_amount: f64,
        advance_amount: f64,
    ) -> LedgerResult<Booking> {
        let now = self.clock.now_millis();

        let booking = {
            let mut state = self.state.lock();
            Self::walk_in_locked(
                &mut state,
                now,
                customer,
                room_id,
                days,
                total_amount,
                advance_amount,
            )
        }
        .inspect_err(|e| {
            tracing::warn!(
                room_id,
                days,
                total_amount,
                advance_amount,
                error = %e,
                "Walk-in booking rejected"
            )
        })?;

        tracing::info!(
            booking_id = booking.id,
            customer_id = booking.customer_id,
            room_id = booking.room_id,
            total_amount = booking.total_amount,
            status = ?booking.payment_status,
            "Walk-in booking created"
        );
        self.persist();
        Ok(booking)
    }

    fn walk_in_locked(
        state: &mut LedgerState,
        now: i64,
        customer: CustomerInput,
        room_id: i64,
        days: i64,
        total_amount: f64,
        advance_amount: f64,
    ) -> LedgerResult<Booking> {
        validate_customer(&customer)?;
        let room = Self::vacant_room(state, room_id)?;
        if days < 1 {
            return Err(RateError::InvalidDays(days).into());
        }
        let checkout = days
            .checked_mul(DAY_MILLIS)
            .and_then(|span| now.checked_add(span))
            .ok_or(RateError::InvalidDays(days))?;
        let resolution = resolve(total_amount, advance_amount)?;
        let next_status = room.status.apply(RoomEvent::Book).map_err(|_| {
            LedgerError::RoomNotVacant {
                room_id,
                room_number: room.room_number.clone(),
            }
        })?;

        // Validated; nothing below can fail.
        let customer = Self::push_customer(state, customer, now, true);
        let booking = Booking {
            id: state.allocate(IdKind::Booking),
            customer_id: customer.id,
            room_id,
            checkin_time: now,
            checkout_time: checkout,
            total_amount: round_money(total_amount),
            payment_status: resolution.status,
            guest_count: 1,
            source: BookingSource::WalkIn,
            created_at: now,
        };
        Ok(Self::commit_booking(
            state,
            booking,
            next_status,
            advance_amount,
            PaymentType::Cash,
            now,
        ))
    }

    /// Book a Vacant room for a registered customer over `[checkin, checkout)`
    pub fn create_reservation(&self, request: ReservationRequest) -> LedgerResult<Booking> {
        let now = self.clock.now_millis();
        let (customer_id, room_id) = (request.customer_id, request.room_id);

        let booking = {
            let mut state = self.state.lock();
            Self::reservation_locked(&mut state, now, request)
        }
        .inspect_err(|e| {
            tracing::warn!(customer_id, room_id, error = %e, "Reservation rejected")
        })?;

        tracing::info!(
            booking_id = booking.id,
            customer_id = booking.customer_id,
            room_id = booking.room_id,
            total_amount = booking.total_amount,
            status = ?booking.payment_status,
            "Reservation created"
        );
        self.persist();
        Ok(booking)
    }

    fn reservation_locked(
        state: &mut LedgerState,
        now: i64,
        request: ReservationRequest,
    ) -> LedgerResult<Booking> {
        if state.customer(request.customer_id).is_none() {
            return Err(LedgerError::CustomerNotFound(request.customer_id));
        }
        let room = Self::vacant_room(state, request.room_id)?;
        pricing::days_between(request.checkin_time, request.checkout_time)?;
        if request.guest_count < 1 {
            return Err(RateError::InvalidGuestCount(request.guest_count).into());
        }
        let resolution = resolve(request.total_amount, request.advance_amount)?;
        let next_status = room.status.apply(RoomEvent::Book).map_err(|_| {
            LedgerError::RoomNotVacant {
                room_id: room.id,
                room_number: room.room_number.clone(),
            }
        })?;

        let booking = Booking {
            id: state.allocate(IdKind::Booking),
            customer_id: request.customer_id,
            room_id: request.room_id,
            checkin_time: request.checkin_time,
            checkout_time: request.checkout_time,
            total_amount: round_money(request.total_amount),
            payment_status: resolution.status,
            guest_count: request.guest_count,
            source: BookingSource::Reservation,
            created_at: now,
        };
        Ok(Self::commit_booking(
            state,
            booking,
            next_status,
            request.advance_amount,
            request.payment_type,
            now,
        ))
    }

    /// Room lookup that also rejects a room that is not Vacant
    fn vacant_room(state: &LedgerState, room_id: i64) -> LedgerResult<Room> {
        let room = state
            .room(room_id)
            .ok_or(LedgerError::RoomNotFound(room_id))?;
        if !room.status.is_vacant() {
            return Err(LedgerError::RoomNotVacant {
                room_id,
                room_number: room.room_number.clone(),
            });
        }
        Ok(room.clone())
    }

    /// Append booking, optional advance payment and the room status change
    fn commit_booking(
        state: &mut LedgerState,
        booking: Booking,
        room_status: RoomStatus,
        advance_amount: f64,
        payment_type: PaymentType,
        now: i64,
    ) -> Booking {
        let advance_amount = round_money(advance_amount);
        if advance_amount > 0.0 {
            let payment = Payment {
                id: state.allocate(IdKind::Payment),
                booking_id: booking.id,
                amount: advance_amount,
                payment_type,
                payment_time: now,
            };
            state.payments.push(payment);
        }
        if let Some(room) = state.room_mut(booking.room_id) {
            room.status = room_status;
        }
        state.bookings.push(booking.clone());
        booking
    }

    /// Side-effect-free preview of a walk-in against the current room rate
    pub fn preview_walk_in(
        &self,
        room_id: i64,
        days: i64,
        total_amount: Option<f64>,
        advance_amount: f64,
    ) -> LedgerResult<BookingPreview> {
        let now = self.clock.now_millis();
        let room = self.room(room_id).ok_or(LedgerError::RoomNotFound(room_id))?;

        let suggested = pricing::suggested_amount(&room, days)?;
        let total = total_amount.unwrap_or(suggested);
        let resolution = resolve(total, advance_amount)?;
        let checkout = days
            .checked_mul(DAY_MILLIS)
            .and_then(|span| now.checked_add(span))
            .ok_or(RateError::InvalidDays(days))?;

        Ok(BookingPreview {
            room_id,
            room_number: room.room_number,
            room_available: room.status.is_vacant(),
            days,
            rate: room.price,
            suggested_amount: suggested,
            total_amount: round_money(total),
            advance_amount: round_money(advance_amount),
            pending_amount: resolution.pending,
            payment_status: resolution.status,
            checkin_time: now,
            checkout_time: checkout,
        })
    }

    /// Rate quote for a room over an explicit range
    pub fn quote(
        &self,
        room_id: i64,
        checkin: i64,
        checkout: i64,
        guest_count: i32,
    ) -> LedgerResult<RateQuote> {
        let room = self.room(room_id).ok_or(LedgerError::RoomNotFound(room_id))?;
        Ok(pricing::quote(&room, checkin, checkout, guest_count)?)
    }

    /// Rate quote for a stay of `days` starting now
    pub fn quote_for_days(
        &self,
        room_id: i64,
        days: i64,
        guest_count: i32,
    ) -> LedgerResult<RateQuote> {
        if days < 1 {
            return Err(RateError::InvalidDays(days).into());
        }
        let now = self.clock.now_millis();
        let checkout = days
            .checked_mul(DAY_MILLIS)
            .and_then(|span| now.checked_add(span))
            .ok_or(RateError::InvalidDays(days))?;
        self.quote(room_id, now, checkout, guest_count)
    }

    // ========== Customers ==========

    /// Register a customer ahead of a reservation
    pub fn register_customer(&self, input: CustomerInput) -> LedgerResult<Customer> {
        let now = self.clock.now_millis();

        let customer = {
            let mut state = self.state.lock();
            Self::register_locked(&mut state, now, input)
        }
        .inspect_err(|e| tracing::warn!(error = %e, "Customer registration rejected"))?;

        tracing::info!(customer_id = customer.id, "Customer registered");
        self.persist();
        Ok(customer)
    }

    fn register_locked(
        state: &mut LedgerState,
        now: i64,
        input: CustomerInput,
    ) -> LedgerResult<Customer> {
        validate_customer(&input)?;
        if state.customer_by_phone(&input.phone).is_some() {
            return Err(LedgerError::DuplicatePhone(input.phone.trim().to_string()));
        }
        Ok(Self::push_customer(state, input, now, false))
    }

    fn push_customer(
        state: &mut LedgerState,
        input: CustomerInput,
        now: i64,
        walk_in: bool,
    ) -> Customer {
        let address = non_blank(input.address).unwrap_or_else(|| {
            if walk_in {
                WALK_IN_ADDRESS.to_string()
            } else {
                String::new()
            }
        });
        let identity_document =
            non_blank(input.identity_document).unwrap_or_else(|| IDENTITY_NOT_PROVIDED.to_string());

        let customer = Customer {
            id: state.allocate(IdKind::Customer),
            name: input.name.trim().to_string(),
            phone: input.phone.trim().to_string(),
            email: input.email.trim().to_string(),
            address,
            identity_document,
            created_at: now,
        };
        state.customers.push(customer.clone());
        customer
    }

    // ========== Payments ==========

    /// Record a later payment against a booking
    ///
    /// The amount may not exceed the outstanding balance.
    pub fn record_payment(
        &self,
        booking_id: i64,
        amount: f64,
        payment_type: PaymentType,
    ) -> LedgerResult<Payment> {
        let now = self.clock.now_millis();

        let (payment, status) = {
            let mut state = self.state.lock();
            Self::payment_locked(&mut state, now, booking_id, amount, payment_type)
        }
        .inspect_err(|e| tracing::warn!(booking_id, amount, error = %e, "Payment rejected"))?;

        tracing::info!(
            payment_id = payment.id,
            booking_id,
            amount = payment.amount,
            status = ?status,
            "Payment recorded"
        );
        self.persist();
        Ok(payment)
    }

    fn payment_locked(
        state: &mut LedgerState,
        now: i64,
        booking_id: i64,
        amount: f64,
        payment_type: PaymentType,
    ) -> LedgerResult<(Payment, PaymentStatus)> {
        let total = state
            .booking(booking_id)
            .ok_or(LedgerError::BookingNotFound(booking_id))?
            .total_amount;
        if !is_valid_amount(amount) || round_money(amount) <= 0.0 {
            return Err(LedgerError::InvalidPaymentAmount(amount));
        }

        let paid = state.paid_for(booking_id);
        let pending = to_f64(to_decimal(total) - to_decimal(paid));
        let resolution = resolve(total, sum_money([paid, amount])).map_err(|e| match e {
            ResolveError::InvalidAdvance { .. } => {
                LedgerError::Overpayment { amount, pending }
            }
            other => other.into(),
        })?;

        let payment = Payment {
            id: state.allocate(IdKind::Payment),
            booking_id,
            amount: round_money(amount),
            payment_type,
            payment_time: now,
        };
        state.payments.push(payment.clone());
        if let Some(booking) = state.booking_mut(booking_id) {
            booking.payment_status = resolution.status;
        }
        Ok((payment, resolution.status))
    }

    /// Total, paid, pending and status for a booking
    pub fn booking_balance(&self, booking_id: i64) -> LedgerResult<PaymentSummary> {
        let state = self.state.lock();
        let booking = state
            .booking(booking_id)
            .ok_or(LedgerError::BookingNotFound(booking_id))?;
        let amounts: Vec<f64> = state.payments_for(booking_id).map(|p| p.amount).collect();
        let resolution = resolve_paid(booking.total_amount, amounts.iter().copied())?;

        Ok(PaymentSummary {
            total: booking.total_amount,
            paid: sum_money(amounts),
            pending: resolution.pending,
            status: resolution.status,
        })
    }

    // ========== Readers ==========

    /// Vacant rooms in id order
    pub fn available_rooms(&self) -> Vec<Room> {
        let state = self.state.lock();
        state
            .rooms
            .iter()
            .filter(|r| r.status.is_vacant())
            .cloned()
            .collect()
    }

    pub fn rooms(&self) -> Vec<Room> {
        self.state.lock().rooms.clone()
    }

    pub fn room(&self, id: i64) -> Option<Room> {
        self.state.lock().room(id).cloned()
    }

    pub fn customers(&self) -> Vec<Customer> {
        self.state.lock().customers.clone()
    }

    pub fn customer(&self, id: i64) -> Option<Customer> {
        self.state.lock().customer(id).cloned()
    }

    pub fn find_customer_by_phone(&self, phone: &str) -> Option<Customer> {
        self.state.lock().customer_by_phone(phone).cloned()
    }

    /// Case-insensitive substring match over name, phone and email
    ///
    /// Queries shorter than [`MIN_SEARCH_LEN`] characters match nothing.
    pub fn search_customers(&self, query: &str) -> Vec<Customer> {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < MIN_SEARCH_LEN {
            return Vec::new();
        }

        let state = self.state.lock();
        state
            .customers
            .iter()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.phone.contains(&needle)
                    || c.email.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.state.lock().bookings.clone()
    }

    pub fn booking(&self, id: i64) -> Option<Booking> {
        self.state.lock().booking(id).cloned()
    }

    pub fn payments_for(&self, booking_id: i64) -> Vec<Payment> {
        self.state.lock().payments_for(booking_id).cloned().collect()
    }

    /// Every payment across all bookings, in recording order
    pub fn payments(&self) -> Vec<Payment> {
        self.state.lock().payments.clone()
    }

    pub fn payment_history(&self) -> PaymentHistory {
        PaymentHistory::new(self.payments())
    }

    pub fn dashboard(&self) -> DashboardSummary {
        let now = self.clock.now_millis();
        reports::dashboard(&self.state.lock(), now)
    }

    /// Copy of the full state, as handed to the store
    pub fn snapshot(&self) -> LedgerSnapshot {
        self.state.lock().snapshot()
    }

    // ========== Persistence ==========

    /// Read back the last saved snapshot to prove the store is reachable
    pub fn check_storage(&self) -> StorageResult<()> {
        self.store.load().map(|_| ())
    }

    fn persist(&self) {
        let _guard = self.persist_lock.lock();
        let snapshot = self.state.lock().snapshot();
        if let Err(e) = self.store.save(&snapshot) {
            tracing::error!(error = %e, "Failed to persist ledger snapshot");
        }
    }
}

fn validate_customer(input: &CustomerInput) -> LedgerResult<()> {
    validate_required_text(&input.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&input.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_required_text(&input.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&input.address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(&input.identity_document, "identity_document", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
