//! Review API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/reviews | GET, POST | bearer |
//! | /api/reviews/submit | POST | none (public form) |
//! | /api/reviews/approved | GET | none |
//! | /api/reviews/featured | GET | none |
//! | /api/reviews/status/{status} | GET | bearer |
//! | /api/reviews/stats | GET | bearer |
//! | /api/reviews/distribution | GET | bearer |
//! | /api/reviews/bulk-delete | POST | bearer |
//! | /api/reviews/{id} | GET, PUT, DELETE | bearer |
//! | /api/reviews/{id}/approve | PUT | bearer |
//! | /api/reviews/{id}/reject | PUT | bearer |
//! | /api/reviews/{id}/feature | PUT | bearer |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reviews", review_routes())
}

fn review_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/submit", post(handler::submit))
        .route("/approved", get(handler::list_approved))
        .route("/featured", get(handler::list_featured))
        .route("/status/{status}", get(handler::list_by_status))
        .route("/stats", get(handler::stats))
        .route("/distribution", get(handler::rating_distribution))
        .route("/bulk-delete", post(handler::delete_many))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/approve", put(handler::approve))
        .route("/{id}/reject", put(handler::reject))
        .route("/{id}/feature", put(handler::feature))
}
