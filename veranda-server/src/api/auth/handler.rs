//! Auth API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::{CurrentUser, verify_password};
use crate::core::ServerState;
use crate::db::repository::admin_user;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub display_name: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ServerState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = admin_user::find_by_username(&state.pool, &payload.username)
        .await?
        .ok_or_else(AppError::invalid_credentials)?;

    if !verify_password(&payload.password, &user.password_hash)? {
        tracing::warn!(target: "security", username = %payload.username, "Failed login attempt");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token(user.id, &user.username)
        .map_err(|e| AppError::internal(format!("Token generation failed: {e}")))?;

    tracing::info!(target: "security", username = %user.username, "Admin login");
    Ok(Json(LoginResponse {
        token,
        username: user.username,
        display_name: user.display_name,
        expires_in: state.jwt_service.config.expiration_minutes * 60,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub id: i64,
    pub username: String,
    pub display_name: String,
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<MeResponse>> {
    let account = admin_user::find_by_id(&state.pool, user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Admin user {}", user.id)))?;
    Ok(Json(MeResponse {
        id: account.id,
        username: account.username,
        display_name: account.display_name,
    }))
}
