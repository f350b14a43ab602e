//! Instagram API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::parse_enum;
use crate::core::ServerState;
use crate::db::repository::instagram_post;
use crate::utils::{AppError, AppResult};
use shared::models::{InstagramPost, InstagramPostCreate, InstagramPostUpdate, InstagramStatus};

/// GET /api/instagram
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<InstagramPost>>> {
    Ok(Json(instagram_post::find_all(&state.pool).await?))
}

/// GET /api/instagram/public - published feed for the marketing site
pub async fn list_public(State(state): State<ServerState>) -> AppResult<Json<Vec<InstagramPost>>> {
    Ok(Json(instagram_post::find_public(&state.pool).await?))
}

/// GET /api/instagram/status/:status
pub async fn list_by_status(
    State(state): State<ServerState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<InstagramPost>>> {
    let status: InstagramStatus = parse_enum(&status, "post status")?;
    Ok(Json(instagram_post::find_by_status(&state.pool, status).await?))
}

/// GET /api/instagram/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<InstagramPost>> {
    let found = instagram_post::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Instagram post {id}")))?;
    Ok(Json(found))
}

/// POST /api/instagram
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<InstagramPostCreate>,
) -> AppResult<Json<InstagramPost>> {
    payload.validate()?;
    Ok(Json(instagram_post::create(&state.pool, payload).await?))
}

/// PUT /api/instagram/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<InstagramPostUpdate>,
) -> AppResult<Json<InstagramPost>> {
    Ok(Json(instagram_post::update(&state.pool, id, payload).await?))
}

/// DELETE /api/instagram/:id
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<()>> {
    if !instagram_post::delete(&state.pool, id).await? {
        return Err(AppError::not_found(format!("Instagram post {id}")));
    }
    Ok(Json(()))
}
