//! Upload Routes
//!
//! | Path | Method | Auth |
//! |------|--------|------|
//! | /api/upload | POST | bearer |
//! | /images/{filename} | GET | none |

mod handler;

use axum::{
    Router,
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    response::IntoResponse,
    routing::{get, post},
};
use http::header;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/upload",
            post(handler::upload).layer(DefaultBodyLimit::max(6 * 1024 * 1024)), // 5MB file + multipart framing
        )
        .route("/images/{filename}", get(serve_image))
}

enum ImageResponse {
    Ok(&'static str, Bytes),
    NotFound,
    BadRequest,
}

impl IntoResponse for ImageResponse {
    fn into_response(self) -> axum::response::Response {
        match self {
            ImageResponse::Ok(mime, content) => {
                (http::StatusCode::OK, [(header::CONTENT_TYPE, mime)], content).into_response()
            }
            ImageResponse::NotFound => {
                (http::StatusCode::NOT_FOUND, "File not found").into_response()
            }
            ImageResponse::BadRequest => {
                (http::StatusCode::BAD_REQUEST, "Invalid filename").into_response()
            }
        }
    }
}

async fn serve_image(
    State(state): State<ServerState>,
    Path(filename): Path<String>,
) -> ImageResponse {
    // reject path traversal attempts
    if filename.is_empty()
        || filename.contains("..")
        || filename.contains('/')
        || filename.contains('\\')
    {
        return ImageResponse::BadRequest;
    }

    let file_path = state.config.images_dir().join(&filename);
    match tokio::fs::read(&file_path).await {
        Ok(content) => {
            let mime = mime_guess::from_path(&filename)
                .first_raw()
                .unwrap_or("application/octet-stream");
            ImageResponse::Ok(mime, content.into())
        }
        Err(_) => ImageResponse::NotFound,
    }
}
