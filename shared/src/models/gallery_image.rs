//! Gallery Image Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Gallery image entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: i64,
    pub title: String,
    pub alt_text: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    /// Resolved image URL (uploaded file preferred); not a column
    #[cfg_attr(feature = "db", sqlx(default))]
    #[serde(default)]
    pub image: String,
    pub category: String,
    pub featured: bool,
    pub active: bool,
    pub sort_order: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl GalleryImage {
    pub fn resolve_image(mut self) -> Self {
        self.image =
            super::resolve_image_url(self.image_file_path.as_deref(), self.image_url.as_deref());
        self
    }
}

/// Create gallery image payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageCreate {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub alt_text: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
    pub sort_order: Option<i64>,
}

/// Update gallery image payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImageUpdate {
    pub title: Option<String>,
    pub alt_text: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    pub category: Option<String>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
    pub sort_order: Option<i64>,
}
