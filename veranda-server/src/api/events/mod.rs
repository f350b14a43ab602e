//! Event API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/events | GET, POST | bearer |
//! | /api/events/public | GET | none |
//! | /api/events/featured | GET | bearer |
//! | /api/events/status/{status} | GET | bearer |
//! | /api/events/{id} | GET, PUT, DELETE | bearer |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/events", event_routes())
}

fn event_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/public", get(handler::list_public))
        .route("/featured", get(handler::list_featured))
        .route("/status/{status}", get(handler::list_by_status))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
