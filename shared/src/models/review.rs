//! Review Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Review moderation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

/// Review entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub review_text: String,
    /// 1..=5
    pub rating: i64,
    pub status: ReviewStatus,
    pub admin_notes: Option<String>,
    pub featured: bool,
    pub display_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Public review submission; always starts `pending`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSubmit {
    #[validate(length(min = 1, max = 200))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: Option<String>,
    #[validate(length(min = 1, max = 4000))]
    pub review_text: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i64,
}

/// Admin-authored review; defaults to `approved`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreate {
    #[validate(length(min = 1, max = 200))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: Option<String>,
    #[validate(length(min = 1, max = 4000))]
    pub review_text: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: i64,
    pub status: Option<ReviewStatus>,
    pub admin_notes: Option<String>,
    pub featured: Option<bool>,
    pub display_order: Option<i64>,
}

/// Update review payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub review_text: Option<String>,
    pub rating: Option<i64>,
    pub status: Option<ReviewStatus>,
    pub admin_notes: Option<String>,
    pub featured: Option<bool>,
    pub display_order: Option<i64>,
}

/// Aggregate review statistics (SQL-side reduction)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total: i64,
    pub approved: i64,
    pub pending: i64,
    pub rejected: i64,
    /// 0.0 for an empty set, never NULL/NaN
    pub average_rating: f64,
    pub featured: i64,
    /// Created within the last 24 hours
    pub recent: i64,
}

/// One bucket of the 1..=5 rating histogram
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct RatingBucket {
    pub rating: i64,
    pub count: i64,
}
