//! Event API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::parse_enum;
use crate::core::ServerState;
use crate::db::repository::event;
use crate::utils::{AppError, AppResult};
use shared::models::{Event, EventCreate, EventStatus, EventUpdate};

/// GET /api/events
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(event::find_all(&state.pool).await?))
}

/// GET /api/events/public - active events for the marketing site
pub async fn list_public(State(state): State<ServerState>) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(event::find_public(&state.pool).await?))
}

/// GET /api/events/featured
pub async fn list_featured(State(state): State<ServerState>) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(event::find_featured(&state.pool).await?))
}

/// GET /api/events/status/:status
pub async fn list_by_status(
    State(state): State<ServerState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<Event>>> {
    let status: EventStatus = parse_enum(&status, "event status")?;
    Ok(Json(event::find_by_status(&state.pool, status).await?))
}

/// GET /api/events/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Event>> {
    let found = event::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Event {id}")))?;
    Ok(Json(found))
}

/// POST /api/events
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EventCreate>,
) -> AppResult<Json<Event>> {
    payload.validate()?;
    Ok(Json(event::create(&state.pool, payload).await?))
}

/// PUT /api/events/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EventUpdate>,
) -> AppResult<Json<Event>> {
    Ok(Json(event::update(&state.pool, id, payload).await?))
}

/// DELETE /api/events/:id
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<()>> {
    if !event::delete(&state.pool, id).await? {
        return Err(AppError::not_found(format!("Event {id}")));
    }
    Ok(Json(()))
}
