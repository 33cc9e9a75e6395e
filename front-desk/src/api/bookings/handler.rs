//! Booking API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::models::{
    Booking, Payment, PaymentInput, PaymentSummary, ReservationRequest, WalkInRequest,
};

use crate::core::ServerState;
use crate::ledger::{BookingPreview, LedgerError};
use crate::utils::{AppError, AppResult};

/// Walk-in preview payload; `total_amount` defaults to the suggested amount
#[derive(Debug, Deserialize)]
pub struct WalkInPreviewRequest {
    pub room_id: i64,
    pub days: i64,
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub advance_amount: f64,
}

/// GET /api/bookings
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Booking>>> {
    Ok(Json(state.ledger.bookings()))
}

/// GET /api/bookings/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .ledger
        .booking(id)
        .ok_or_else(|| AppError::from(LedgerError::BookingNotFound(id)))?;
    Ok(Json(booking))
}

/// POST /api/bookings/walk-in - customer, booking and advance in one step
pub async fn create_walk_in(
    State(state): State<ServerState>,
    Json(payload): Json<WalkInRequest>,
) -> AppResult<Json<Booking>> {
    let booking = state.ledger.create_walk_in_booking(
        payload.customer,
        payload.room_id,
        payload.days,
        payload.total_amount,
        payload.advance_amount,
    )?;
    Ok(Json(booking))
}

/// POST /api/bookings/walk-in/preview
pub async fn preview_walk_in(
    State(state): State<ServerState>,
    Json(payload): Json<WalkInPreviewRequest>,
) -> AppResult<Json<BookingPreview>> {
    let preview = state.ledger.preview_walk_in(
        payload.room_id,
        payload.days,
        payload.total_amount,
        payload.advance_amount,
    )?;
    Ok(Json(preview))
}

/// POST /api/bookings - reservation for a registered customer
pub async fn create_reservation(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationRequest>,
) -> AppResult<Json<Booking>> {
    let booking = state.ledger.create_reservation(payload)?;
    Ok(Json(booking))
}

/// GET /api/bookings/{id}/balance
pub async fn balance(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<PaymentSummary>> {
    Ok(Json(state.ledger.booking_balance(id)?))
}

/// GET /api/bookings/{id}/payments
pub async fn list_payments(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<Payment>>> {
    if state.ledger.booking(id).is_none() {
        return Err(LedgerError::BookingNotFound(id).into());
    }
    Ok(Json(state.ledger.payments_for(id)))
}

/// POST /api/bookings/{id}/payments - record a later payment
pub async fn record_payment(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<PaymentInput>,
) -> AppResult<Json<Payment>> {
    let payment = state
        .ledger
        .record_payment(id, payload.amount, payload.payment_type)?;
    Ok(Json(payment))
}
