//! Reservation API module
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/reservations | GET | bearer |
//! | /api/reservations | POST | none (public booking form) |
//! | /api/reservations/code/{code} | GET | none |
//! | /api/reservations/status/{status} | GET | bearer |
//! | /api/reservations/date/{date} | GET | bearer |
//! | /api/reservations/bulk-delete | POST | bearer |
//! | /api/reservations/{id} | GET, PUT, DELETE | bearer |
//! | /api/reservations/{id}/status | PUT | bearer |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", reservation_routes())
}

fn reservation_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/code/{code}", get(handler::get_by_code))
        .route("/status/{status}", get(handler::list_by_status))
        .route("/date/{date}", get(handler::list_by_date))
        .route("/bulk-delete", post(handler::delete_many))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/status", put(handler::set_status))
}
