//! Menu Item Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    /// Resolved image URL (uploaded file preferred); not a column
    #[cfg_attr(feature = "db", sqlx(default))]
    #[serde(default)]
    pub image: String,
    pub available: bool,
    pub featured: bool,
    /// Stored as a JSON array in TEXT
    #[cfg_attr(feature = "db", sqlx(json))]
    pub ingredients: Vec<String>,
    pub prep_time: Option<String>,
    pub calories: i64,
    pub rating: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl MenuItem {
    pub fn resolve_image(mut self) -> Self {
        self.image =
            super::resolve_image_url(self.image_file_path.as_deref(), self.image_url.as_deref());
        self
    }
}

/// Create menu item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    pub available: Option<bool>,
    pub featured: Option<bool>,
    pub ingredients: Option<Vec<String>>,
    pub prep_time: Option<String>,
    pub calories: Option<i64>,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: Option<f64>,
}

/// Update menu item payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    pub available: Option<bool>,
    pub featured: Option<bool>,
    pub ingredients: Option<Vec<String>>,
    pub prep_time: Option<String>,
    pub calories: Option<i64>,
    pub rating: Option<f64>,
}
