//! Instagram Post Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Instagram post publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum InstagramStatus {
    Published,
    Scheduled,
    Draft,
}

impl Default for InstagramStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// Instagram post entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct InstagramPost {
    pub id: i64,
    pub title: String,
    pub caption: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    /// Resolved image URL (uploaded file preferred); not a column
    #[cfg_attr(feature = "db", sqlx(default))]
    #[serde(default)]
    pub image: String,
    pub instagram_url: Option<String>,
    /// Stored as a JSON array in TEXT
    #[cfg_attr(feature = "db", sqlx(json))]
    pub hashtags: Vec<String>,
    /// `YYYY-MM-DD`, only meaningful for scheduled posts
    pub scheduled_date: Option<String>,
    pub status: InstagramStatus,
    pub likes: i64,
    pub comments: i64,
    pub featured: bool,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl InstagramPost {
    pub fn resolve_image(mut self) -> Self {
        self.image =
            super::resolve_image_url(self.image_file_path.as_deref(), self.image_url.as_deref());
        self
    }
}

/// Create Instagram post payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InstagramPostCreate {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub caption: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    pub instagram_url: Option<String>,
    pub hashtags: Option<Vec<String>>,
    pub scheduled_date: Option<String>,
    pub status: Option<InstagramStatus>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
}

/// Update Instagram post payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramPostUpdate {
    pub title: Option<String>,
    pub caption: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    pub instagram_url: Option<String>,
    pub hashtags: Option<Vec<String>>,
    pub scheduled_date: Option<String>,
    pub status: Option<InstagramStatus>,
    pub likes: Option<i64>,
    pub comments: Option<i64>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
}
