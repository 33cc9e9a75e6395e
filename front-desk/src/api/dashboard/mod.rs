//! Dashboard API

use axum::{Json, Router, extract::State, routing::get};

use crate::core::ServerState;
use crate::ledger::DashboardSummary;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/dashboard", get(summary))
}

/// GET /api/dashboard - occupancy, revenue and booking figures
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<DashboardSummary>> {
    Ok(Json(state.ledger.dashboard()))
}
