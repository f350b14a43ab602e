//! Shared types for the Veranda back-office
//!
//! Entity models, create/update payloads and small utilities used by
//! the server crate and by API clients. DB row types use
//! `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]` so the models
//! stay usable without pulling in sqlx.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
