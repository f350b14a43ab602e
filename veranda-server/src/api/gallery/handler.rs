//! Gallery API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::api::{BulkDeleteRequest, BulkDeleteResponse};
use crate::core::ServerState;
use crate::db::repository::gallery_image;
use crate::utils::{AppError, AppResult};
use shared::models::{GalleryImage, GalleryImageCreate, GalleryImageUpdate};

/// GET /api/gallery
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<GalleryImage>>> {
    Ok(Json(gallery_image::find_all(&state.pool).await?))
}

/// GET /api/gallery/public - active images for the marketing site
pub async fn list_public(State(state): State<ServerState>) -> AppResult<Json<Vec<GalleryImage>>> {
    Ok(Json(gallery_image::find_public(&state.pool).await?))
}

/// GET /api/gallery/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<GalleryImage>> {
    let found = gallery_image::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Gallery image {id}")))?;
    Ok(Json(found))
}

/// POST /api/gallery
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<GalleryImageCreate>,
) -> AppResult<Json<GalleryImage>> {
    payload.validate()?;
    Ok(Json(gallery_image::create(&state.pool, payload).await?))
}

/// PUT /api/gallery/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<GalleryImageUpdate>,
) -> AppResult<Json<GalleryImage>> {
    Ok(Json(gallery_image::update(&state.pool, id, payload).await?))
}

/// DELETE /api/gallery/:id
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<()>> {
    if !gallery_image::delete(&state.pool, id).await? {
        return Err(AppError::not_found(format!("Gallery image {id}")));
    }
    Ok(Json(()))
}

/// POST /api/gallery/bulk-delete
pub async fn delete_many(
    State(state): State<ServerState>,
    Json(payload): Json<BulkDeleteRequest>,
) -> AppResult<Json<BulkDeleteResponse>> {
    let deleted = gallery_image::delete_many(&state.pool, &payload.ids).await?;
    Ok(Json(BulkDeleteResponse { deleted }))
}
