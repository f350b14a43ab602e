//! Dashboard Aggregation
//!
//! Stateless cross-collection reads for the back-office landing screen.
//! Each entry point fetches what it needs concurrently, reduces in
//! memory, and returns a snapshot that is discarded after the response.
//! A failure in any one fetch fails the whole call; there is no partial
//! result and no retry.

pub mod activity;
pub mod stats;

use crate::db::repository::{
    event, gallery_image, instagram_post, menu_item, reservation, review, special_offer,
};
use crate::db::repository::RepoResult;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{ReservationStatus, ReviewStatus};
use sqlx::SqlitePool;

pub use activity::RecentActivity;
pub use stats::DashboardStats;

/// Badge counters for the admin sidebar quick actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickActions {
    pub pending_reservations: i64,
    pub pending_reviews: i64,
    pub upcoming_events: i64,
    /// Items currently unavailable, the closest thing to a stock alert
    pub unavailable_menu_items: i64,
    /// Bookings created in the sliding 24-hour window ending now
    pub new_reservations_24h: i64,
}

/// Compact counters for the overview header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickOverview {
    pub upcoming_events: i64,
    pub menu_items: i64,
    pub pending_reservations: i64,
    pub total_reviews: i64,
}

/// Full snapshot across all seven collections.
///
/// The fetches run concurrently and the reads are not transactional;
/// another session may write between them, so the per-collection counts
/// are individually, not mutually, consistent.
pub async fn compute_stats(
    pool: &SqlitePool,
    today: NaiveDate,
    now_ms: i64,
) -> RepoResult<DashboardStats> {
    let (events, menu, gallery, offers, instagram, reservations, reviews) = tokio::try_join!(
        event::find_all(pool),
        menu_item::find_all(pool),
        gallery_image::find_all(pool),
        special_offer::find_all(pool),
        instagram_post::find_all(pool),
        reservation::find_all(pool),
        review::stats(pool, now_ms),
    )?;
    Ok(DashboardStats {
        events: stats::reduce_events(&events, today),
        menu: stats::reduce_menu(&menu),
        gallery: stats::reduce_gallery(&gallery),
        offers: stats::reduce_offers(&offers, today),
        instagram: stats::reduce_instagram(&instagram),
        reservations: stats::reduce_reservations(&reservations, today),
        reviews,
    })
}

/// Latest bookings and reviews plus the soonest upcoming events.
pub async fn recent_activity(pool: &SqlitePool, today: NaiveDate) -> RepoResult<RecentActivity> {
    let (reservations, reviews, events) = tokio::try_join!(
        reservation::find_all(pool),
        review::find_all(pool),
        event::find_all(pool),
    )?;
    Ok(RecentActivity {
        reservations: activity::recent_reservations(reservations),
        reviews: activity::recent_reviews(reviews),
        upcoming_events: activity::upcoming_events(events, today),
    })
}

pub async fn quick_actions(
    pool: &SqlitePool,
    today: NaiveDate,
    now_ms: i64,
) -> RepoResult<QuickActions> {
    let (reservations, reviews, events, menu) = tokio::try_join!(
        reservation::find_all(pool),
        review::find_by_status(pool, ReviewStatus::Pending),
        event::find_all(pool),
        menu_item::find_all(pool),
    )?;
    let cutoff = now_ms - 24 * 60 * 60 * 1000;
    Ok(QuickActions {
        pending_reservations: reservations
            .iter()
            .filter(|r| r.status == ReservationStatus::Pending)
            .count() as i64,
        pending_reviews: reviews.len() as i64,
        upcoming_events: stats::reduce_events(&events, today).upcoming,
        unavailable_menu_items: menu.iter().filter(|i| !i.available).count() as i64,
        new_reservations_24h: reservations.iter().filter(|r| r.created_at >= cutoff).count()
            as i64,
    })
}

pub async fn quick_overview(pool: &SqlitePool, today: NaiveDate) -> RepoResult<QuickOverview> {
    let (events, menu, reservations, reviews) = tokio::try_join!(
        event::find_all(pool),
        menu_item::find_all(pool),
        reservation::find_by_status(pool, ReservationStatus::Pending),
        review::find_all(pool),
    )?;
    Ok(QuickOverview {
        upcoming_events: stats::reduce_events(&events, today).upcoming,
        menu_items: menu.len() as i64,
        pending_reservations: reservations.len() as i64,
        total_reviews: reviews.len() as i64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use shared::models::{EventCreate, EventStatus, MenuItemCreate, ReservationCreate, ReviewSubmit};

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    async fn seed(db: &DbService) {
        for (date, status) in [
            ("2026-06-20", EventStatus::Upcoming),
            ("2026-06-01", EventStatus::Completed),
        ] {
            crate::db::repository::event::create(
                &db.pool,
                EventCreate {
                    title: format!("Event {date}"),
                    description: String::new(),
                    date: date.into(),
                    time: "19:00".into(),
                    image_url: None,
                    image_file_path: None,
                    status: Some(status),
                    capacity: None,
                    registered: None,
                    price: None,
                    category: "music".into(),
                    event_type: None,
                    featured: None,
                    active: None,
                },
            )
            .await
            .unwrap();
        }
        crate::db::repository::menu_item::create(
            &db.pool,
            MenuItemCreate {
                name: "Carbonara".into(),
                description: String::new(),
                price: 14.0,
                category: "mains".into(),
                image_url: None,
                image_file_path: None,
                available: Some(false),
                featured: None,
                ingredients: None,
                prep_time: None,
                calories: None,
                rating: None,
            },
        )
        .await
        .unwrap();
        crate::db::repository::reservation::create(
            &db.pool,
            ReservationCreate {
                customer_name: "alice".into(),
                customer_email: "alice@example.com".into(),
                customer_phone: "+34 600 000 001".into(),
                reservation_date: "2026-06-15".into(),
                reservation_time: "20:00".into(),
                number_of_guests: 2,
                status: None,
                special_requests: None,
                occasion: None,
                seating_preference: None,
                table_number: None,
                staff_notes: None,
            },
        )
        .await
        .unwrap();
        crate::db::repository::review::submit(
            &db.pool,
            ReviewSubmit {
                customer_name: "bob".into(),
                customer_email: None,
                review_text: "Great pasta.".into(),
                rating: 5,
            },
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn snapshot_covers_every_collection() {
        let db = DbService::in_memory().await.unwrap();
        seed(&db).await;
        let now = shared::util::now_millis();
        let snapshot = compute_stats(&db.pool, day("2026-06-15"), now).await.unwrap();

        assert_eq!(snapshot.events.total, 2);
        assert_eq!(snapshot.events.upcoming, 1);
        assert_eq!(snapshot.events.past, 1);
        assert_eq!(snapshot.menu.total, 1);
        assert_eq!(snapshot.menu.available, 0);
        assert_eq!(snapshot.gallery.total, 0);
        assert_eq!(snapshot.offers.total, 0);
        assert_eq!(snapshot.instagram.total, 0);
        assert_eq!(snapshot.reservations.total, 1);
        assert_eq!(snapshot.reservations.pending, 1);
        assert_eq!(snapshot.reservations.today, 1);
        assert_eq!(snapshot.reviews.total, 1);
        assert_eq!(snapshot.reviews.average_rating, 5.0);
    }

    #[tokio::test]
    async fn back_to_back_snapshots_agree() {
        let db = DbService::in_memory().await.unwrap();
        seed(&db).await;
        let now = shared::util::now_millis();
        let first = compute_stats(&db.pool, day("2026-06-15"), now).await.unwrap();
        let second = compute_stats(&db.pool, day("2026-06-15"), now).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn one_failed_fetch_fails_the_whole_snapshot() {
        let db = DbService::in_memory().await.unwrap();
        seed(&db).await;
        sqlx::query("DROP TABLE gallery_image")
            .execute(&db.pool)
            .await
            .unwrap();
        let result = compute_stats(&db.pool, day("2026-06-15"), shared::util::now_millis()).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn quick_actions_window_slides_with_the_clock() {
        let db = DbService::in_memory().await.unwrap();
        seed(&db).await;
        let now = shared::util::now_millis();

        let fresh = quick_actions(&db.pool, day("2026-06-15"), now).await.unwrap();
        assert_eq!(fresh.pending_reservations, 1);
        assert_eq!(fresh.pending_reviews, 1);
        assert_eq!(fresh.upcoming_events, 1);
        assert_eq!(fresh.unavailable_menu_items, 1);
        assert_eq!(fresh.new_reservations_24h, 1);

        let stale = quick_actions(&db.pool, day("2026-06-15"), now + 48 * 60 * 60 * 1000)
            .await
            .unwrap();
        assert_eq!(stale.new_reservations_24h, 0);
    }

    #[tokio::test]
    async fn overview_counts_line_up_with_the_snapshot() {
        let db = DbService::in_memory().await.unwrap();
        seed(&db).await;
        let overview = quick_overview(&db.pool, day("2026-06-15")).await.unwrap();
        assert_eq!(overview.upcoming_events, 1);
        assert_eq!(overview.menu_items, 1);
        assert_eq!(overview.pending_reservations, 1);
        assert_eq!(overview.total_reviews, 1);
    }
}
