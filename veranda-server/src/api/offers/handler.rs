//! Special Offer API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::repository::special_offer;
use crate::utils::time::{business_today, parse_date};
use crate::utils::{AppError, AppResult};
use shared::models::{SpecialOffer, SpecialOfferCreate, SpecialOfferUpdate};

/// GET /api/offers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<SpecialOffer>>> {
    Ok(Json(special_offer::find_all(&state.pool).await?))
}

/// GET /api/offers/public - offers still valid on the current business day
pub async fn list_public(State(state): State<ServerState>) -> AppResult<Json<Vec<SpecialOffer>>> {
    let today = business_today(state.config.timezone).to_string();
    Ok(Json(special_offer::find_public(&state.pool, &today).await?))
}

/// GET /api/offers/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<SpecialOffer>> {
    let found = special_offer::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Special offer {id}")))?;
    Ok(Json(found))
}

/// POST /api/offers
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SpecialOfferCreate>,
) -> AppResult<Json<SpecialOffer>> {
    payload.validate()?;
    parse_date(&payload.valid_from)?;
    parse_date(&payload.valid_until)?;
    Ok(Json(special_offer::create(&state.pool, payload).await?))
}

/// PUT /api/offers/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<SpecialOfferUpdate>,
) -> AppResult<Json<SpecialOffer>> {
    if let Some(from) = &payload.valid_from {
        parse_date(from)?;
    }
    if let Some(until) = &payload.valid_until {
        parse_date(until)?;
    }
    Ok(Json(special_offer::update(&state.pool, id, payload).await?))
}

/// DELETE /api/offers/:id
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<()>> {
    if !special_offer::delete(&state.pool, id).await? {
        return Err(AppError::not_found(format!("Special offer {id}")));
    }
    Ok(Json(()))
}
