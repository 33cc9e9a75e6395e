//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::{Customer, CustomerInput};

use crate::core::ServerState;
use crate::ledger::LedgerError;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct CustomerQuery {
    /// Exact phone match
    pub phone: Option<String>,
    /// Substring search over name, phone and email
    pub q: Option<String>,
}

/// GET /api/customers - all customers, `?phone=` lookup or `?q=` search
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<CustomerQuery>,
) -> AppResult<Json<Vec<Customer>>> {
    let customers = match (query.phone, query.q) {
        (Some(phone), _) => state.ledger.find_customer_by_phone(&phone).into_iter().collect(),
        (None, Some(q)) => state.ledger.search_customers(&q),
        (None, None) => state.ledger.customers(),
    };
    Ok(Json(customers))
}

/// GET /api/customers/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Customer>> {
    let customer = state
        .ledger
        .customer(id)
        .ok_or_else(|| AppError::from(LedgerError::CustomerNotFound(id)))?;
    Ok(Json(customer))
}

/// POST /api/customers - register a customer ahead of a reservation
pub async fn register(
    State(state): State<ServerState>,
    Json(payload): Json<CustomerInput>,
) -> AppResult<Json<Customer>> {
    Ok(Json(state.ledger.register_customer(payload)?))
}
