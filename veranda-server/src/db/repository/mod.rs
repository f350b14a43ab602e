//! Repository Module
//!
//! CRUD operations over the SQLite tables, one module per entity.
//! Free async functions taking `&SqlitePool`; partial updates use
//! COALESCE so absent fields stay untouched (last write wins, no
//! version token).

pub mod admin_user;
pub mod event;
pub mod gallery_image;
pub mod instagram_post;
pub mod menu_item;
pub mod reservation;
pub mod review;
pub mod special_offer;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                RepoError::Duplicate(db.to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Build a `?,?,...` placeholder list for dynamic IN clauses.
pub(crate) fn placeholders(n: usize) -> String {
    vec!["?"; n].join(",")
}
