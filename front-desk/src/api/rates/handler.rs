//! Rate quote handler

use axum::{Json, extract::State};
use serde::Deserialize;

use crate::core::ServerState;
use crate::pricing::RateQuote;
use crate::utils::{AppError, AppResult, ErrorCode};

/// Quote request: either `days` from now or an explicit range
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub room_id: i64,
    pub days: Option<i64>,
    pub checkin_time: Option<i64>,
    pub checkout_time: Option<i64>,
    #[serde(default = "default_guest_count")]
    pub guest_count: i32,
}

fn default_guest_count() -> i32 {
    1
}

/// POST /api/rates/quote - suggested total for a stay, no side effects
pub async fn quote(
    State(state): State<ServerState>,
    Json(payload): Json<QuoteRequest>,
) -> AppResult<Json<RateQuote>> {
    let quote = match (payload.checkin_time, payload.checkout_time, payload.days) {
        (Some(checkin), Some(checkout), _) => {
            state
                .ledger
                .quote(payload.room_id, checkin, checkout, payload.guest_count)?
        }
        (None, None, Some(days)) => {
            state
                .ledger
                .quote_for_days(payload.room_id, days, payload.guest_count)?
        }
        _ => {
            return Err(AppError::with_message(
                ErrorCode::RequiredField,
                "Either days or both checkin_time and checkout_time are required",
            ));
        }
    };
    Ok(Json(quote))
}
