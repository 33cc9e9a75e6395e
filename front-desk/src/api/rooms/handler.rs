//! Room API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Room, RoomCreate};

use crate::core::ServerState;
use crate::ledger::LedgerError;
use crate::utils::{AppError, AppResult};

/// GET /api/rooms - all rooms in id order
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Room>>> {
    Ok(Json(state.ledger.rooms()))
}

/// GET /api/rooms/available - Vacant rooms only
pub async fn list_available(State(state): State<ServerState>) -> AppResult<Json<Vec<Room>>> {
    Ok(Json(state.ledger.available_rooms()))
}

/// GET /api/rooms/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Room>> {
    let room = state
        .ledger
        .room(id)
        .ok_or_else(|| AppError::from(LedgerError::RoomNotFound(id)))?;
    Ok(Json(room))
}

/// POST /api/rooms - add a Vacant room to the inventory
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<RoomCreate>,
) -> AppResult<Json<Room>> {
    let room = state.ledger.add_room(payload)?;
    Ok(Json(room))
}
