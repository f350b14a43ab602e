//! Review API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use validator::Validate;

use crate::api::{BulkDeleteRequest, BulkDeleteResponse, parse_enum};
use crate::core::ServerState;
use crate::db::repository::review;
use crate::utils::{AppError, AppResult};
use shared::models::{
    RatingBucket, Review, ReviewCreate, ReviewStats, ReviewStatus, ReviewSubmit, ReviewUpdate,
};

/// GET /api/reviews
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Review>>> {
    Ok(Json(review::find_all(&state.pool).await?))
}

/// GET /api/reviews/approved - public testimonial wall
pub async fn list_approved(State(state): State<ServerState>) -> AppResult<Json<Vec<Review>>> {
    Ok(Json(review::find_approved(&state.pool).await?))
}

/// GET /api/reviews/featured
pub async fn list_featured(State(state): State<ServerState>) -> AppResult<Json<Vec<Review>>> {
    Ok(Json(review::find_featured(&state.pool).await?))
}

/// GET /api/reviews/status/:status
pub async fn list_by_status(
    State(state): State<ServerState>,
    Path(status): Path<String>,
) -> AppResult<Json<Vec<Review>>> {
    let status: ReviewStatus = parse_enum(&status, "review status")?;
    Ok(Json(review::find_by_status(&state.pool, status).await?))
}

/// GET /api/reviews/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Review>> {
    let found = review::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Review {id}")))?;
    Ok(Json(found))
}

/// POST /api/reviews/submit - public form, lands in moderation
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<ReviewSubmit>,
) -> AppResult<Json<Review>> {
    payload.validate()?;
    Ok(Json(review::submit(&state.pool, payload).await?))
}

/// POST /api/reviews - admin-authored, published immediately
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReviewCreate>,
) -> AppResult<Json<Review>> {
    payload.validate()?;
    Ok(Json(review::create(&state.pool, payload).await?))
}

/// PUT /api/reviews/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ReviewUpdate>,
) -> AppResult<Json<Review>> {
    Ok(Json(review::update(&state.pool, id, payload).await?))
}

/// PUT /api/reviews/:id/approve
pub async fn approve(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Review>> {
    Ok(Json(review::set_status(&state.pool, id, ReviewStatus::Approved).await?))
}

/// PUT /api/reviews/:id/reject
pub async fn reject(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Review>> {
    Ok(Json(review::set_status(&state.pool, id, ReviewStatus::Rejected).await?))
}

#[derive(Debug, Deserialize)]
pub struct FeatureRequest {
    pub featured: bool,
}

/// PUT /api/reviews/:id/feature
pub async fn feature(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<FeatureRequest>,
) -> AppResult<Json<Review>> {
    let update = ReviewUpdate {
        featured: Some(payload.featured),
        ..Default::default()
    };
    Ok(Json(review::update(&state.pool, id, update).await?))
}

/// GET /api/reviews/stats
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<ReviewStats>> {
    let now = shared::util::now_millis();
    Ok(Json(review::stats(&state.pool, now).await?))
}

/// GET /api/reviews/distribution
pub async fn rating_distribution(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<RatingBucket>>> {
    Ok(Json(review::rating_distribution(&state.pool).await?))
}

/// DELETE /api/reviews/:id
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<Json<()>> {
    if !review::delete(&state.pool, id).await? {
        return Err(AppError::not_found(format!("Review {id}")));
    }
    Ok(Json(()))
}

/// POST /api/reviews/bulk-delete
pub async fn delete_many(
    State(state): State<ServerState>,
    Json(payload): Json<BulkDeleteRequest>,
) -> AppResult<Json<BulkDeleteResponse>> {
    let deleted = review::delete_many(&state.pool, &payload.ids).await?;
    Ok(Json(BulkDeleteResponse { deleted }))
}
