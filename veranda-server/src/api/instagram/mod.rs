//! Instagram API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/instagram | GET, POST | bearer |
//! | /api/instagram/public | GET | none |
//! | /api/instagram/status/{status} | GET | bearer |
//! | /api/instagram/{id} | GET, PUT, DELETE | bearer |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/instagram", instagram_routes())
}

fn instagram_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/public", get(handler::list_public))
        .route("/status/{status}", get(handler::list_by_status))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
