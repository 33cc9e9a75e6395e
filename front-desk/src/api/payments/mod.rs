//! Payment history API

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use crate::ledger::PaymentHistory;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/payments", get(history))
}

/// GET /api/payments - every payment with count and total
pub async fn history(State(state): State<ServerState>) -> AppResult<Json<PaymentHistory>> {
    Ok(Json(state.ledger.payment_history()))
}
