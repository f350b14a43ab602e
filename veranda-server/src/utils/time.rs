//! Calendar helpers - business timezone conversion
//!
//! All derived date classifications (upcoming/past, expired, "today")
//! compare stored `YYYY-MM-DD` strings against the current calendar
//! day in the configured business timezone. Nothing derived is ever
//! persisted.

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` date string, surfacing a validation error.
///
/// Only the canonical zero-padded form is accepted. Stored dates are
/// compared and sorted as strings, so an unpadded `2026-2-28` would
/// order before `2026-01-01` once persisted.
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))?;
    // chrono's %m/%d accept unpadded numbers; round-trip to reject them
    if day.format("%Y-%m-%d").to_string() != date {
        return Err(AppError::validation(format!("Invalid date format: {}", date)));
    }
    Ok(day)
}

/// Lenient variant for stored data: malformed dates classify as None
/// rather than failing a whole aggregation.
pub fn parse_day(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Current calendar day in the business timezone.
pub fn business_today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_days() {
        assert!(parse_date("2026-02-28").is_ok());
        assert!(parse_date("tomorrow").is_err());
    }

    #[test]
    fn parse_date_rejects_unpadded_days() {
        assert!(parse_date("2026-2-28").is_err());
        assert!(parse_date("2026-02-8").is_err());
        assert!(parse_date("2026-2-8").is_err());
    }

    #[test]
    fn parse_day_is_lenient() {
        assert_eq!(parse_day("not-a-date"), None);
        assert!(parse_day("2026-08-30").is_some());
    }
}
