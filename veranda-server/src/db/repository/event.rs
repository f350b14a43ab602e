//! Event Repository

use super::{RepoError, RepoResult};
use shared::models::{Event, EventCreate, EventStatus, EventUpdate};
use sqlx::SqlitePool;

const EVENT_SELECT: &str = "SELECT id, title, description, date, time, image_url, image_file_path, status, capacity, registered, price, category, event_type, featured, active, created_at, updated_at FROM event";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Event>> {
    let sql = format!("{EVENT_SELECT} ORDER BY date DESC, time DESC");
    let events = sqlx::query_as::<_, Event>(&sql).fetch_all(pool).await?;
    Ok(events.into_iter().map(Event::resolve_image).collect())
}

/// Active events for the public site, soonest first.
pub async fn find_public(pool: &SqlitePool) -> RepoResult<Vec<Event>> {
    let sql = format!("{EVENT_SELECT} WHERE active = 1 ORDER BY date ASC, time ASC");
    let events = sqlx::query_as::<_, Event>(&sql).fetch_all(pool).await?;
    Ok(events.into_iter().map(Event::resolve_image).collect())
}

pub async fn find_featured(pool: &SqlitePool) -> RepoResult<Vec<Event>> {
    let sql =
        format!("{EVENT_SELECT} WHERE active = 1 AND featured = 1 ORDER BY date ASC, time ASC");
    let events = sqlx::query_as::<_, Event>(&sql).fetch_all(pool).await?;
    Ok(events.into_iter().map(Event::resolve_image).collect())
}

pub async fn find_by_status(pool: &SqlitePool, status: EventStatus) -> RepoResult<Vec<Event>> {
    let sql = format!("{EVENT_SELECT} WHERE status = ? ORDER BY date DESC, time DESC");
    let events = sqlx::query_as::<_, Event>(&sql)
        .bind(status)
        .fetch_all(pool)
        .await?;
    Ok(events.into_iter().map(Event::resolve_image).collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Event>> {
    let sql = format!("{EVENT_SELECT} WHERE id = ?");
    let event = sqlx::query_as::<_, Event>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(event.map(Event::resolve_image))
}

pub async fn create(pool: &SqlitePool, data: EventCreate) -> RepoResult<Event> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO event (id, title, description, date, time, image_url, image_file_path, status, capacity, registered, price, category, event_type, featured, active, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.description)
    .bind(&data.date)
    .bind(&data.time)
    .bind(&data.image_url)
    .bind(&data.image_file_path)
    .bind(data.status.unwrap_or_default())
    .bind(data.capacity.unwrap_or(0))
    .bind(data.registered.unwrap_or(0))
    .bind(data.price.unwrap_or_default())
    .bind(&data.category)
    .bind(&data.event_type)
    .bind(data.featured.unwrap_or(false))
    .bind(data.active.unwrap_or(true))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create event".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: EventUpdate) -> RepoResult<Event> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE event SET \
            title = COALESCE(?1, title), \
            description = COALESCE(?2, description), \
            date = COALESCE(?3, date), \
            time = COALESCE(?4, time), \
            image_url = COALESCE(?5, image_url), \
            image_file_path = COALESCE(?6, image_file_path), \
            status = COALESCE(?7, status), \
            capacity = COALESCE(?8, capacity), \
            registered = COALESCE(?9, registered), \
            price = COALESCE(?10, price), \
            category = COALESCE(?11, category), \
            event_type = COALESCE(?12, event_type), \
            featured = COALESCE(?13, featured), \
            active = COALESCE(?14, active), \
            updated_at = ?15 \
         WHERE id = ?16",
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(&data.date)
    .bind(&data.time)
    .bind(&data.image_url)
    .bind(&data.image_file_path)
    .bind(data.status)
    .bind(data.capacity)
    .bind(data.registered)
    .bind(&data.price)
    .bind(&data.category)
    .bind(&data.event_type)
    .bind(data.featured)
    .bind(data.active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Event {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Event {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM event WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn sample() -> EventCreate {
        EventCreate {
            title: "Jazz Night".into(),
            description: "Live trio".into(),
            date: "2026-09-15".into(),
            time: "20:00".into(),
            image_url: Some("https://cdn.example.com/jazz.jpg".into()),
            image_file_path: None,
            status: None,
            capacity: Some(60),
            registered: None,
            price: Some("10€".into()),
            category: "music".into(),
            event_type: None,
            featured: Some(true),
            active: None,
        }
    }

    #[tokio::test]
    async fn create_applies_defaults() {
        let db = DbService::in_memory().await.unwrap();
        let event = create(&db.pool, sample()).await.unwrap();
        assert_eq!(event.status, EventStatus::Upcoming);
        assert_eq!(event.registered, 0);
        assert!(event.active);
        assert_eq!(event.image, "https://cdn.example.com/jazz.jpg");
    }

    #[tokio::test]
    async fn partial_update_leaves_other_fields() {
        let db = DbService::in_memory().await.unwrap();
        let event = create(&db.pool, sample()).await.unwrap();
        let updated = update(
            &db.pool,
            event.id,
            EventUpdate {
                capacity: Some(80),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.capacity, 80);
        assert_eq!(updated.title, "Jazz Night");
        assert_eq!(updated.date, "2026-09-15");
    }

    #[tokio::test]
    async fn uploaded_image_wins_at_read_time() {
        let db = DbService::in_memory().await.unwrap();
        let event = create(&db.pool, sample()).await.unwrap();
        let updated = update(
            &db.pool,
            event.id,
            EventUpdate {
                image_file_path: Some("deadbeef.jpg".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.image, "/images/deadbeef.jpg");
    }

    #[tokio::test]
    async fn update_missing_event_is_not_found() {
        let db = DbService::in_memory().await.unwrap();
        let err = update(&db.pool, 999, EventUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_whether_row_existed() {
        let db = DbService::in_memory().await.unwrap();
        let event = create(&db.pool, sample()).await.unwrap();
        assert!(delete(&db.pool, event.id).await.unwrap());
        assert!(!delete(&db.pool, event.id).await.unwrap());
        assert!(find_by_id(&db.pool, event.id).await.unwrap().is_none());
    }
}
