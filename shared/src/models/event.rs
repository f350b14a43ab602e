//! Event Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Event lifecycle status.
///
/// Never auto-transitioned by the clock; "upcoming vs past" relative to
/// today is a derived classification computed at read time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl Default for EventStatus {
    fn default() -> Self {
        Self::Upcoming
    }
}

/// Event entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    /// Event day, `YYYY-MM-DD`
    pub date: String,
    /// Start time, `HH:MM`
    pub time: String,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    /// Resolved image URL (uploaded file preferred); not a column
    #[cfg_attr(feature = "db", sqlx(default))]
    #[serde(default)]
    pub image: String,
    pub status: EventStatus,
    pub capacity: i64,
    pub registered: i64,
    pub price: String,
    pub category: String,
    pub event_type: Option<String>,
    pub featured: bool,
    pub active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Event {
    /// Fill the derived `image` field from the stored references.
    pub fn resolve_image(mut self) -> Self {
        self.image =
            super::resolve_image_url(self.image_file_path.as_deref(), self.image_url.as_deref());
        self
    }
}

/// Create event payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventCreate {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    pub status: Option<EventStatus>,
    #[validate(range(min = 0))]
    pub capacity: Option<i64>,
    pub registered: Option<i64>,
    pub price: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    pub event_type: Option<String>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
}

/// Update event payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub image_url: Option<String>,
    pub image_file_path: Option<String>,
    pub status: Option<EventStatus>,
    pub capacity: Option<i64>,
    pub registered: Option<i64>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub event_type: Option<String>,
    pub featured: Option<bool>,
    pub active: Option<bool>,
}
