//! Dashboard API Handlers
//!
//! Thin wrappers supplying the real clock (business-timezone day and
//! millisecond instant) to the aggregation functions.

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::dashboard::{self, DashboardStats, QuickActions, QuickOverview, RecentActivity};
use crate::utils::AppResult;
use crate::utils::time::business_today;

/// GET /api/dashboard/stats
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    let today = business_today(state.config.timezone);
    let now = shared::util::now_millis();
    Ok(Json(dashboard::compute_stats(&state.pool, today, now).await?))
}

/// GET /api/dashboard/recent-activity
pub async fn recent_activity(State(state): State<ServerState>) -> AppResult<Json<RecentActivity>> {
    let today = business_today(state.config.timezone);
    Ok(Json(dashboard::recent_activity(&state.pool, today).await?))
}

/// GET /api/dashboard/quick-actions
pub async fn quick_actions(State(state): State<ServerState>) -> AppResult<Json<QuickActions>> {
    let today = business_today(state.config.timezone);
    let now = shared::util::now_millis();
    Ok(Json(dashboard::quick_actions(&state.pool, today, now).await?))
}

/// GET /api/dashboard/overview
pub async fn overview(State(state): State<ServerState>) -> AppResult<Json<QuickOverview>> {
    let today = business_today(state.config.timezone);
    Ok(Json(dashboard::quick_overview(&state.pool, today).await?))
}
