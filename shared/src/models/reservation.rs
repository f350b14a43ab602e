//! Reservation Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Reservation status; transitioned only by admin actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "snake_case"))]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

impl Default for ReservationStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    /// `YYYY-MM-DD`
    pub reservation_date: String,
    /// `HH:MM`
    pub reservation_time: String,
    pub number_of_guests: i64,
    pub status: ReservationStatus,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
    pub seating_preference: Option<String>,
    pub table_number: Option<String>,
    pub staff_notes: Option<String>,
    /// Unique short code handed to the customer on booking
    pub confirmation_code: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub confirmed_at: Option<i64>,
    pub cancelled_at: Option<i64>,
    pub completed_at: Option<i64>,
}

/// Create reservation payload (public booking form or admin)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    #[validate(length(min = 1, max = 200))]
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    #[validate(length(min = 3, max = 40))]
    pub customer_phone: String,
    pub reservation_date: String,
    pub reservation_time: String,
    #[validate(range(min = 1, max = 50))]
    pub number_of_guests: i64,
    /// Defaults to `pending`; admins may create pre-confirmed bookings
    pub status: Option<ReservationStatus>,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
    pub seating_preference: Option<String>,
    pub table_number: Option<String>,
    pub staff_notes: Option<String>,
}

/// Update reservation payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUpdate {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub reservation_date: Option<String>,
    pub reservation_time: Option<String>,
    pub number_of_guests: Option<i64>,
    pub special_requests: Option<String>,
    pub occasion: Option<String>,
    pub seating_preference: Option<String>,
    pub table_number: Option<String>,
    pub staff_notes: Option<String>,
}
