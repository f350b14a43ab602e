//! Reservation Repository

use super::{RepoError, RepoResult, placeholders};
use shared::models::{Reservation, ReservationCreate, ReservationStatus, ReservationUpdate};
use sqlx::SqlitePool;

const RESERVATION_SELECT: &str = "SELECT id, customer_name, customer_email, customer_phone, reservation_date, reservation_time, number_of_guests, status, special_requests, occasion, seating_preference, table_number, staff_notes, confirmation_code, created_at, updated_at, confirmed_at, cancelled_at, completed_at FROM reservation";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Reservation>> {
    let sql = format!("{RESERVATION_SELECT} ORDER BY reservation_date DESC, reservation_time DESC");
    Ok(sqlx::query_as::<_, Reservation>(&sql)
        .fetch_all(pool)
        .await?)
}

pub async fn find_by_status(
    pool: &SqlitePool,
    status: ReservationStatus,
) -> RepoResult<Vec<Reservation>> {
    let sql = format!(
        "{RESERVATION_SELECT} WHERE status = ? ORDER BY reservation_date, reservation_time"
    );
    Ok(sqlx::query_as::<_, Reservation>(&sql)
        .bind(status)
        .fetch_all(pool)
        .await?)
}

pub async fn find_by_date(pool: &SqlitePool, date: &str) -> RepoResult<Vec<Reservation>> {
    let sql = format!("{RESERVATION_SELECT} WHERE reservation_date = ? ORDER BY reservation_time");
    Ok(sqlx::query_as::<_, Reservation>(&sql)
        .bind(date)
        .fetch_all(pool)
        .await?)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Reservation>> {
    let sql = format!("{RESERVATION_SELECT} WHERE id = ?");
    Ok(sqlx::query_as::<_, Reservation>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?)
}

/// Customer-facing lookup by the code handed out at booking time.
pub async fn find_by_confirmation_code(
    pool: &SqlitePool,
    code: &str,
) -> RepoResult<Option<Reservation>> {
    let sql = format!("{RESERVATION_SELECT} WHERE confirmation_code = ?");
    Ok(sqlx::query_as::<_, Reservation>(&sql)
        .bind(code.to_ascii_uppercase())
        .fetch_optional(pool)
        .await?)
}

pub async fn create(pool: &SqlitePool, data: ReservationCreate) -> RepoResult<Reservation> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    let status = data.status.unwrap_or_default();
    let confirmed_at = (status == ReservationStatus::Confirmed).then_some(now);

    // The code space is 32^8; retry a few times in case of a collision.
    let mut last_err = None;
    for _ in 0..3 {
        let code = shared::util::confirmation_code();
        let result = sqlx::query(
            "INSERT INTO reservation (id, customer_name, customer_email, customer_phone, reservation_date, reservation_time, number_of_guests, status, special_requests, occasion, seating_preference, table_number, staff_notes, confirmation_code, created_at, updated_at, confirmed_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(id)
        .bind(&data.customer_name)
        .bind(&data.customer_email)
        .bind(&data.customer_phone)
        .bind(&data.reservation_date)
        .bind(&data.reservation_time)
        .bind(data.number_of_guests)
        .bind(status)
        .bind(&data.special_requests)
        .bind(&data.occasion)
        .bind(&data.seating_preference)
        .bind(&data.table_number)
        .bind(&data.staff_notes)
        .bind(&code)
        .bind(now)
        .bind(now)
        .bind(confirmed_at)
        .execute(pool)
        .await;
        match result {
            Ok(_) => {
                return find_by_id(pool, id)
                    .await?
                    .ok_or_else(|| RepoError::Database("Failed to create reservation".into()));
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                last_err = Some(RepoError::Duplicate(format!(
                    "Confirmation code collision: {code}"
                )));
            }
            Err(e) => return Err(e.into()),
        }
    }
    Err(last_err.unwrap_or_else(|| RepoError::Database("Failed to create reservation".into())))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ReservationUpdate) -> RepoResult<Reservation> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE reservation SET \
            customer_name = COALESCE(?1, customer_name), \
            customer_email = COALESCE(?2, customer_email), \
            customer_phone = COALESCE(?3, customer_phone), \
            reservation_date = COALESCE(?4, reservation_date), \
            reservation_time = COALESCE(?5, reservation_time), \
            number_of_guests = COALESCE(?6, number_of_guests), \
            special_requests = COALESCE(?7, special_requests), \
            occasion = COALESCE(?8, occasion), \
            seating_preference = COALESCE(?9, seating_preference), \
            table_number = COALESCE(?10, table_number), \
            staff_notes = COALESCE(?11, staff_notes), \
            updated_at = ?12 \
         WHERE id = ?13",
    )
    .bind(&data.customer_name)
    .bind(&data.customer_email)
    .bind(&data.customer_phone)
    .bind(&data.reservation_date)
    .bind(&data.reservation_time)
    .bind(data.number_of_guests)
    .bind(&data.special_requests)
    .bind(&data.occasion)
    .bind(&data.seating_preference)
    .bind(&data.table_number)
    .bind(&data.staff_notes)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reservation {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
}

/// Moves a reservation into `status` and stamps the matching timestamp column.
pub async fn set_status(
    pool: &SqlitePool,
    id: i64,
    status: ReservationStatus,
) -> RepoResult<Reservation> {
    let now = shared::util::now_millis();
    let stamp_column = match status {
        ReservationStatus::Confirmed => Some("confirmed_at"),
        ReservationStatus::Cancelled => Some("cancelled_at"),
        ReservationStatus::Completed => Some("completed_at"),
        _ => None,
    };
    let sql = match stamp_column {
        Some(col) => format!(
            "UPDATE reservation SET status = ?1, updated_at = ?2, {col} = ?2 WHERE id = ?3"
        ),
        None => "UPDATE reservation SET status = ?1, updated_at = ?2 WHERE id = ?3".to_string(),
    };
    let rows = sqlx::query(&sql)
        .bind(status)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Reservation {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Reservation {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM reservation WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn delete_many(pool: &SqlitePool, ids: &[i64]) -> RepoResult<u64> {
    if ids.is_empty() {
        return Ok(0);
    }
    let sql = format!(
        "DELETE FROM reservation WHERE id IN ({})",
        placeholders(ids.len())
    );
    let mut query = sqlx::query(&sql);
    for id in ids {
        query = query.bind(id);
    }
    let rows = query.execute(pool).await?;
    Ok(rows.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn booking(name: &str, date: &str) -> ReservationCreate {
        ReservationCreate {
            customer_name: name.into(),
            customer_email: format!("{name}@example.com"),
            customer_phone: "+34 600 000 000".into(),
            reservation_date: date.into(),
            reservation_time: "20:00".into(),
            number_of_guests: 2,
            status: None,
            special_requests: None,
            occasion: None,
            seating_preference: None,
            table_number: None,
            staff_notes: None,
        }
    }

    #[tokio::test]
    async fn booking_gets_a_code_and_starts_pending() {
        let db = DbService::in_memory().await.unwrap();
        let created = create(&db.pool, booking("alice", "2026-09-10")).await.unwrap();
        assert_eq!(created.status, ReservationStatus::Pending);
        assert_eq!(created.confirmation_code.len(), 8);
        assert!(created.confirmed_at.is_none());

        let looked_up = find_by_confirmation_code(
            &db.pool,
            &created.confirmation_code.to_ascii_lowercase(),
        )
        .await
        .unwrap()
        .unwrap();
        assert_eq!(looked_up.id, created.id);
    }

    #[tokio::test]
    async fn status_transitions_stamp_their_timestamps() {
        let db = DbService::in_memory().await.unwrap();
        let created = create(&db.pool, booking("bob", "2026-09-11")).await.unwrap();

        let confirmed = set_status(&db.pool, created.id, ReservationStatus::Confirmed)
            .await
            .unwrap();
        assert_eq!(confirmed.status, ReservationStatus::Confirmed);
        assert!(confirmed.confirmed_at.is_some());
        assert!(confirmed.cancelled_at.is_none());

        let cancelled = set_status(&db.pool, created.id, ReservationStatus::Cancelled)
            .await
            .unwrap();
        assert!(cancelled.cancelled_at.is_some());
        // the earlier stamp is kept
        assert_eq!(cancelled.confirmed_at, confirmed.confirmed_at);

        let no_show = set_status(&db.pool, created.id, ReservationStatus::NoShow)
            .await
            .unwrap();
        assert_eq!(no_show.status, ReservationStatus::NoShow);
        assert!(no_show.completed_at.is_none());
    }

    #[tokio::test]
    async fn admin_created_confirmed_booking_is_stamped() {
        let db = DbService::in_memory().await.unwrap();
        let mut data = booking("carol", "2026-09-12");
        data.status = Some(ReservationStatus::Confirmed);
        let created = create(&db.pool, data).await.unwrap();
        assert_eq!(created.status, ReservationStatus::Confirmed);
        assert!(created.confirmed_at.is_some());
    }

    #[tokio::test]
    async fn bulk_delete_counts_rows() {
        let db = DbService::in_memory().await.unwrap();
        let a = create(&db.pool, booking("dave", "2026-09-13")).await.unwrap();
        let b = create(&db.pool, booking("erin", "2026-09-14")).await.unwrap();
        assert_eq!(delete_many(&db.pool, &[a.id, b.id]).await.unwrap(), 2);
        assert!(find_all(&db.pool).await.unwrap().is_empty());
    }
}
