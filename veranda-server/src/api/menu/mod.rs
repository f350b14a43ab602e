//! Menu API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/menu | GET, POST | bearer |
//! | /api/menu/public | GET | none |
//! | /api/menu/category/{category} | GET | bearer |
//! | /api/menu/{id} | GET, PUT, DELETE | bearer |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/menu", menu_routes())
}

fn menu_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/public", get(handler::list_public))
        .route("/category/{category}", get(handler::list_by_category))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
