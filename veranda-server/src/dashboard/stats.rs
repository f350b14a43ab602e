//! Per-collection reductions for the dashboard snapshot.
//!
//! Every function here is a pure fold over already-fetched rows plus an
//! injected `today`, so tests run against fixed calendar days instead of
//! the wall clock.

use crate::utils::time::parse_day;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::{
    Event, EventStatus, GalleryImage, InstagramPost, InstagramStatus, MenuItem, Reservation,
    ReservationStatus, ReviewStats, SpecialOffer,
};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub total: i64,
    /// `status == upcoming` and dated today or later
    pub upcoming: i64,
    /// Dated strictly before today, regardless of status
    pub past: i64,
    pub active: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSummary {
    pub total: i64,
    pub available: i64,
    pub categories: i64,
    pub featured: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GallerySummary {
    pub total: i64,
    pub featured: i64,
    pub categories: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferSummary {
    pub total: i64,
    /// `active` flag set and not yet expired today
    pub active: i64,
    /// `valid_until` strictly before today
    pub expired: i64,
    pub featured: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramSummary {
    pub total: i64,
    pub published: i64,
    pub draft: i64,
    pub featured: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationSummary {
    pub total: i64,
    pub pending: i64,
    pub confirmed: i64,
    pub cancelled: i64,
    /// Calendar-day equality against the business day, not a time range
    pub today: i64,
}

/// Point-in-time cross-collection snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub events: EventSummary,
    pub menu: MenuSummary,
    pub gallery: GallerySummary,
    pub offers: OfferSummary,
    pub instagram: InstagramSummary,
    pub reservations: ReservationSummary,
    pub reviews: ReviewStats,
}

pub fn reduce_events(events: &[Event], today: NaiveDate) -> EventSummary {
    let mut upcoming = 0;
    let mut past = 0;
    for event in events {
        // rows with an unparseable date land in neither bucket
        let Some(day) = parse_day(&event.date) else {
            continue;
        };
        if day < today {
            past += 1;
        } else if event.status == EventStatus::Upcoming {
            upcoming += 1;
        }
    }
    EventSummary {
        total: events.len() as i64,
        upcoming,
        past,
        active: events.iter().filter(|e| e.active).count() as i64,
    }
}

pub fn reduce_menu(items: &[MenuItem]) -> MenuSummary {
    let categories: HashSet<&str> = items.iter().map(|i| i.category.as_str()).collect();
    MenuSummary {
        total: items.len() as i64,
        available: items.iter().filter(|i| i.available).count() as i64,
        categories: categories.len() as i64,
        featured: items.iter().filter(|i| i.featured).count() as i64,
    }
}

pub fn reduce_gallery(images: &[GalleryImage]) -> GallerySummary {
    let categories: HashSet<&str> = images.iter().map(|i| i.category.as_str()).collect();
    GallerySummary {
        total: images.len() as i64,
        featured: images.iter().filter(|i| i.featured).count() as i64,
        categories: categories.len() as i64,
    }
}

pub fn reduce_offers(offers: &[SpecialOffer], today: NaiveDate) -> OfferSummary {
    let expired =
        |offer: &SpecialOffer| matches!(parse_day(&offer.valid_until), Some(day) if day < today);
    OfferSummary {
        total: offers.len() as i64,
        active: offers.iter().filter(|o| o.active && !expired(o)).count() as i64,
        expired: offers.iter().filter(|o| expired(o)).count() as i64,
        featured: offers.iter().filter(|o| o.featured && o.active).count() as i64,
    }
}

pub fn reduce_instagram(posts: &[InstagramPost]) -> InstagramSummary {
    let by = |status: InstagramStatus| posts.iter().filter(|p| p.status == status).count() as i64;
    InstagramSummary {
        total: posts.len() as i64,
        published: by(InstagramStatus::Published),
        draft: by(InstagramStatus::Draft),
        featured: posts.iter().filter(|p| p.featured).count() as i64,
    }
}

pub fn reduce_reservations(reservations: &[Reservation], today: NaiveDate) -> ReservationSummary {
    let by = |status: ReservationStatus| {
        reservations.iter().filter(|r| r.status == status).count() as i64
    };
    ReservationSummary {
        total: reservations.len() as i64,
        pending: by(ReservationStatus::Pending),
        confirmed: by(ReservationStatus::Confirmed),
        cancelled: by(ReservationStatus::Cancelled),
        today: reservations
            .iter()
            .filter(|r| parse_day(&r.reservation_date) == Some(today))
            .count() as i64,
    }
}
