//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use validator::Validate;

use crate::api::{BulkDeleteRequest, BulkDeleteResponse, parse_enum};
use crate::auth::MaybeUser;
use crate::core::ServerState;
use crate::db::repository::reservation;
use crate::utils::time::parse_date;
use crate::utils::{AppError, AppResult};
use shared::models::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};

/// GET /api/reservations
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Reservation>>> {
    Ok(Json(reservation::find_all(&state.pool).await?))
}

/// GET /api/reservations/status/:status
pub async fn list_by_status(
    State(state): State<ServerState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<Reservation>>> {
    let status: ReservationStatus = parse_enum(&status, "reservation status")?;
    Ok(Json(reservation::find_by_status(&state.pool, status).await?))
}

/// GET /api/reservations/date/:date
pub async fn list_by_date(
    State(state): State<ServerState>,
    Path(date): Path<String>,
) -> AppResult<Json<Vec<Reservation>>> {
    parse_date(&date)?;
    Ok(Json(reservation::find_by_date(&state.pool, &date).await?))
}

/// GET /api/reservations/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Reservation>> {
    let found = reservation::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {id}")))?;
    Ok(Json(found))
}

/// GET /api/reservations/code/:code - customer self-service lookup
pub async fn get_by_code(
    State(state): State<ServerState>,
    Path(code): Path<String>,
) -> AppResult<Json<Reservation>> {
    let found = reservation::find_by_confirmation_code(&state.pool, &code)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Reservation {code}")))?;
    Ok(Json(found))
}

/// POST /api/reservations - public booking form, also used by admins
///
/// Only an authenticated caller may choose an initial status; public
/// bookings always start pending.
pub async fn create(
    State(state): State<ServerState>,
    MaybeUser(user): MaybeUser,
    Json(mut payload): Json<ReservationCreate>,
) -> AppResult<Json<Reservation>> {
    payload.validate()?;
    parse_date(&payload.reservation_date)?;
    if user.is_none() {
        payload.status = None;
        payload.table_number = None;
        payload.staff_notes = None;
    }
    Ok(Json(reservation::create(&state.pool, payload).await?))
}

/// PUT /api/reservations/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReservationUpdate>,
) -> AppResult<Json<Reservation>> {
    if let Some(date) = &payload.reservation_date {
        parse_date(date)?;
    }
    Ok(Json(reservation::update(&state.pool, id, payload).await?))
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub status: ReservationStatus,
}

/// PUT /api/reservations/:id/status
pub async fn set_status(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SetStatusRequest>,
) -> AppResult<Json<Reservation>> {
    Ok(Json(reservation::set_status(&state.pool, id, payload.status).await?))
}

/// DELETE /api/reservations/:id
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<()>> {
    if !reservation::delete(&state.pool, id).await? {
        return Err(AppError::not_found(format!("Reservation {id}")));
    }
    Ok(Json(()))
}

/// POST /api/reservations/bulk-delete
pub async fn delete_many(
    State(state): State<ServerState>,
    Json(payload): Json<BulkDeleteRequest>,
) -> AppResult<Json<BulkDeleteResponse>> {
    let deleted = reservation::delete_many(&state.pool, &payload.ids).await?;
    Ok(Json(BulkDeleteResponse { deleted }))
}
