//! Gallery API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/gallery | GET, POST | bearer |
//! | /api/gallery/public | GET | none |
//! | /api/gallery/bulk-delete | POST | bearer |
//! | /api/gallery/{id} | GET, PUT, DELETE | bearer |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/gallery", gallery_routes())
}

fn gallery_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/public", get(handler::list_public))
        .route("/bulk-delete", post(handler::delete_many))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
