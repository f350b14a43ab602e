//! Recent-activity slices for the dashboard feed.

use crate::utils::time::parse_day;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{Event, EventStatus, Reservation, ReservationStatus, Review, ReviewStatus};

const SLICE_LEN: usize = 5;
const REVIEW_PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationActivity {
    pub id: i64,
    pub customer_name: String,
    pub reservation_date: String,
    pub reservation_time: String,
    pub number_of_guests: i64,
    pub status: ReservationStatus,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewActivity {
    pub id: i64,
    pub customer_name: String,
    pub rating: i64,
    /// At most 100 characters, with a trailing ellipsis when cut
    pub review_text: String,
    pub status: ReviewStatus,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventActivity {
    pub id: i64,
    pub title: String,
    pub date: String,
    pub time: String,
    pub status: EventStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    pub reservations: Vec<ReservationActivity>,
    pub reviews: Vec<ReviewActivity>,
    pub upcoming_events: Vec<EventActivity>,
}

/// Character-based cut so multi-byte text never splits mid-codepoint.
/// Exactly `max_chars` characters passes through untouched.
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}…", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Newest bookings first; ties on `created_at` broken by higher id.
pub fn recent_reservations(mut reservations: Vec<Reservation>) -> Vec<ReservationActivity> {
    reservations.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    reservations
        .into_iter()
        .take(SLICE_LEN)
        .map(|r| ReservationActivity {
            id: r.id,
            customer_name: r.customer_name,
            reservation_date: r.reservation_date,
            reservation_time: r.reservation_time,
            number_of_guests: r.number_of_guests,
            status: r.status,
            created_at: r.created_at,
        })
        .collect()
}

pub fn recent_reviews(mut reviews: Vec<Review>) -> Vec<ReviewActivity> {
    reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    reviews
        .into_iter()
        .take(SLICE_LEN)
        .map(|r| ReviewActivity {
            id: r.id,
            customer_name: r.customer_name,
            rating: r.rating,
            review_text: truncate_preview(&r.review_text, REVIEW_PREVIEW_CHARS),
            status: r.status,
            created_at: r.created_at,
        })
        .collect()
}

/// Soonest upcoming events, dated today or later.
pub fn upcoming_events(mut events: Vec<Event>, today: NaiveDate) -> Vec<EventActivity> {
    events.retain(|e| {
        e.status == EventStatus::Upcoming
            && matches!(parse_day(&e.date), Some(day) if day >= today)
    });
    events.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then(a.time.cmp(&b.time))
            .then(a.id.cmp(&b.id))
    });
    events
        .into_iter()
        .take(SLICE_LEN)
        .map(|e| EventActivity {
            id: e.id,
            title: e.title,
            date: e.date,
            time: e.time,
            status: e.status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservation(created_at: i64) -> Reservation {
        Reservation {
            id: shared::util::snowflake_id(),
            customer_name: "guest".into(),
            customer_email: "guest@example.com".into(),
            customer_phone: "+34 600 000 000".into(),
            reservation_date: "2026-09-01".into(),
            reservation_time: "20:00".into(),
            number_of_guests: 2,
            status: ReservationStatus::Pending,
            special_requests: None,
            occasion: None,
            seating_preference: None,
            table_number: None,
            staff_notes: None,
            confirmation_code: "AAAA2222".into(),
            created_at,
            updated_at: created_at,
            confirmed_at: None,
            cancelled_at: None,
            completed_at: None,
        }
    }

    fn review(text: &str) -> Review {
        Review {
            id: shared::util::snowflake_id(),
            customer_name: "guest".into(),
            customer_email: None,
            review_text: text.into(),
            rating: 4,
            status: ReviewStatus::Pending,
            admin_notes: None,
            featured: false,
            display_order: 0,
            created_at: 1000,
            updated_at: 1000,
        }
    }

    #[test]
    fn eight_bookings_reduce_to_the_five_newest() {
        let input: Vec<Reservation> = (1..=8).map(|i| reservation(i * 100)).collect();
        let slice = recent_reservations(input);
        assert_eq!(slice.len(), 5);
        let stamps: Vec<i64> = slice.iter().map(|r| r.created_at).collect();
        assert_eq!(stamps, vec![800, 700, 600, 500, 400]);
    }

    #[test]
    fn created_at_ties_fall_back_to_id() {
        let a = reservation(500);
        let b = reservation(500);
        let winner = a.id.max(b.id);
        let slice = recent_reservations(vec![a, b]);
        assert_eq!(slice[0].id, winner);
    }

    #[test]
    fn long_review_text_is_cut_at_one_hundred_chars() {
        let long = "x".repeat(150);
        let slice = recent_reviews(vec![review(&long)]);
        assert_eq!(slice[0].review_text.chars().count(), 101);
        assert!(slice[0].review_text.ends_with('…'));

        let exact = "y".repeat(100);
        let slice = recent_reviews(vec![review(&exact)]);
        assert_eq!(slice[0].review_text, exact);
    }

    #[test]
    fn truncation_is_codepoint_safe() {
        let text = "é".repeat(120);
        let cut = truncate_preview(&text, 100);
        assert_eq!(cut.chars().count(), 101);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn upcoming_slice_skips_past_and_non_upcoming() {
        let today = chrono::NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
        let make = |date: &str, status| Event {
            id: shared::util::snowflake_id(),
            title: "Tasting".into(),
            description: String::new(),
            date: date.into(),
            time: "19:00".into(),
            image_url: None,
            image_file_path: None,
            image: String::new(),
            status,
            capacity: 20,
            registered: 0,
            price: "Free".into(),
            category: "food".into(),
            event_type: None,
            featured: false,
            active: true,
            created_at: 0,
            updated_at: 0,
        };
        let events = vec![
            make("2026-06-10", EventStatus::Upcoming),
            make("2026-06-20", EventStatus::Upcoming),
            make("2026-06-15", EventStatus::Upcoming),
            make("2026-06-25", EventStatus::Completed),
        ];
        let slice = upcoming_events(events, today);
        assert_eq!(slice.len(), 2);
        assert_eq!(slice[0].date, "2026-06-15");
        assert_eq!(slice[1].date, "2026-06-20");
    }
}
