//! Admin User Model

use serde::{Deserialize, Serialize};

/// Back-office operator account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    /// Argon2 PHC string; never serialized to API responses
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: String,
    pub created_at: i64,
    pub updated_at: i64,
}
