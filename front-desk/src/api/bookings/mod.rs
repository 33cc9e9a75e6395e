//! Booking API
//!
//! | Path | Method | Operation |
//! |------|--------|-----------|
//! | /api/bookings | GET | list bookings |
//! | /api/bookings | POST | reservation for a registered customer |
//! | /api/bookings/walk-in | POST | walk-in booking |
//! | /api/bookings/walk-in/preview | POST | walk-in preview, no side effects |
//! | /api/bookings/{id} | GET | single booking |
//! | /api/bookings/{id}/balance | GET | total, paid, pending |
//! | /api/bookings/{id}/payments | GET / POST | payments for a booking |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bookings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create_reservation))
        .route("/walk-in", post(handler::create_walk_in))
        .route("/walk-in/preview", post(handler::preview_walk_in))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/balance", get(handler::balance))
        .route(
            "/{id}/payments",
            get(handler::list_payments).post(handler::record_payment),
        )
}
