//! HTTP API
//!
//! One module per resource, each exposing a `router()` that nests under
//! its own `/api/...` prefix. Assembled in `routes`.

use serde::de::DeserializeOwned;

use crate::utils::{AppError, AppResult};

pub mod auth;
pub mod dashboard;
pub mod events;
pub mod gallery;
pub mod health;
pub mod instagram;
pub mod menu;
pub mod offers;
pub mod reservations;
pub mod reviews;
pub mod upload;

/// Parses a path segment into a serde string enum (status values etc.).
pub(crate) fn parse_enum<T: DeserializeOwned>(segment: &str, what: &str) -> AppResult<T> {
    serde_json::from_value(serde_json::Value::String(segment.to_string()))
        .map_err(|_| AppError::validation(format!("Unknown {what}: {segment}")))
}

/// Body for the bulk-delete endpoints.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct BulkDeleteRequest {
    pub ids: Vec<i64>,
}

/// Count responses for bulk mutations.
#[derive(Debug, serde::Serialize)]
pub(crate) struct BulkDeleteResponse {
    pub deleted: u64,
}

