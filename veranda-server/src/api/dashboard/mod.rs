//! Dashboard API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/dashboard/stats | GET | bearer |
//! | /api/dashboard/recent-activity | GET | bearer |
//! | /api/dashboard/quick-actions | GET | bearer |
//! | /api/dashboard/overview | GET | bearer |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/dashboard", dashboard_routes())
}

fn dashboard_routes() -> Router<ServerState> {
    Router::new()
        .route("/stats", get(handler::stats))
        .route("/recent-activity", get(handler::recent_activity))
        .route("/quick-actions", get(handler::quick_actions))
        .route("/overview", get(handler::overview))
}
