//! Data models
//!
//! Shared between veranda-server and API clients.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY, snowflake-generated).
//! Calendar fields are `YYYY-MM-DD` strings, clock fields `HH:MM`,
//! and `created_at`/`updated_at` are Unix milliseconds.

pub mod admin_user;
pub mod event;
pub mod gallery_image;
pub mod instagram_post;
pub mod menu_item;
pub mod reservation;
pub mod review;
pub mod special_offer;

// Re-exports
pub use admin_user::*;
pub use event::*;
pub use gallery_image::*;
pub use instagram_post::*;
pub use menu_item::*;
pub use reservation::*;
pub use review::*;
pub use special_offer::*;

/// Resolve the displayable image URL for an image-bearing entity.
///
/// An uploaded file reference wins over an externally supplied URL;
/// with neither, the result is an empty string.
pub fn resolve_image_url(file_path: Option<&str>, url: Option<&str>) -> String {
    match file_path {
        Some(p) if !p.is_empty() => format!("/images/{p}"),
        _ => url.unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_image_url;

    #[test]
    fn uploaded_file_wins_over_external_url() {
        let url = resolve_image_url(Some("abc123.jpg"), Some("https://cdn.example.com/x.jpg"));
        assert_eq!(url, "/images/abc123.jpg");
    }

    #[test]
    fn falls_back_to_external_url() {
        let url = resolve_image_url(None, Some("https://cdn.example.com/x.jpg"));
        assert_eq!(url, "https://cdn.example.com/x.jpg");
        assert_eq!(resolve_image_url(Some(""), Some("u")), "u");
    }

    #[test]
    fn empty_when_no_source() {
        assert_eq!(resolve_image_url(None, None), "");
    }
}
