//! Special Offer API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/offers | GET, POST | bearer |
//! | /api/offers/public | GET | none |
//! | /api/offers/{id} | GET, PUT, DELETE | bearer |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/offers", offer_routes())
}

fn offer_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/public", get(handler::list_public))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}
