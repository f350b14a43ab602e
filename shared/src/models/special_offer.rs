//! Special Offer Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Special offer entity
///
/// "Expired" is never stored; it is derived at read time from
/// `valid_until` against the current business day.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct SpecialOffer {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Display string, e.g. "2x1" or "20% off"
    pub discount: String,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    /// Resolved image URL (uploaded file preferred); not a column
    #[cfg_attr(feature = "db", sqlx(default))]
    #[serde(default)]
    pub image: String,
    /// Display string, e.g. "Mon-Fri 18:00-20:00"
    pub timing: Option<String>,
    /// `YYYY-MM-DD`
    pub valid_from: String,
    /// `YYYY-MM-DD`, inclusive
    pub valid_until: String,
    /// Stored as a JSON array in TEXT
    #[cfg_attr(feature = "db", sqlx(json))]
    pub terms: Vec<String>,
    pub featured: bool,
    pub active: bool,
    pub sort_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl SpecialOffer {
    pub fn resolve_image(mut self) -> Self {
        self.image =
            super::resolve_image_url(self.image_file_path.as_deref(), self.image_url.as_deref());
        self
    }
}

/// Create special offer payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOfferCreate {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: String,
    #[validate(length(min = 1, max = 100))]
    pub discount: String,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    pub timing: Option<String>,
    pub valid_from: String,
    pub valid_until: String,
    pub terms: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
    pub sort_order: Option<i64>,
}

/// Update special offer payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOfferUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub discount: Option<String>,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    pub timing: Option<String>,
    pub valid_from: Option<String>,
    pub valid_until: Option<String>,
    pub terms: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
    pub sort_order: Option<i64>,
}
