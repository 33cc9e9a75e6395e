//! HTTP API
//!
//! # Structure
//!
//! - [`health`] - liveness and storage checks
//! - [`rooms`] - room inventory
//! - [`rates`] - rate quotes
//! - [`bookings`] - walk-ins, reservations, payments
//! - [`customers`] - customer registration and lookup
//! - [`payments`] - payment history across bookings
//! - [`dashboard`] - front-desk figures
//!
//! Errors come back as `ApiResponse` JSON carrying the numeric error code,
//! with the HTTP status taken from that code.

pub mod bookings;
pub mod customers;
pub mod dashboard;
pub mod health;
pub mod payments;
pub mod rates;
pub mod rooms;

use axum::{Router, middleware};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// HTTP access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Every route, no middleware
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(rooms::router())
        .merge(rates::router())
        .merge(bookings::router())
        .merge(customers::router())
        .merge(payments::router())
        .merge(dashboard::router())
}

/// Routes plus the middleware stack, still waiting for state
///
/// Used by the server and by oneshot tests.
pub fn build_app() -> Router<ServerState> {
    build_router()
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(log_request))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
