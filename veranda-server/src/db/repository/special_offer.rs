//! Special Offer Repository

use super::{RepoError, RepoResult};
use shared::models::{SpecialOffer, SpecialOfferCreate, SpecialOfferUpdate};
use sqlx::SqlitePool;

const OFFER_SELECT: &str = "SELECT id, title, description, discount, image_url, image_file_path, timing, valid_from, valid_until, terms, featured, active, sort_order, created_at, updated_at FROM special_offer";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<SpecialOffer>> {
    let sql = format!("{OFFER_SELECT} ORDER BY sort_order, created_at DESC");
    let offers = sqlx::query_as::<_, SpecialOffer>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(offers
        .into_iter()
        .map(SpecialOffer::resolve_image)
        .collect())
}

/// Active offers still valid on the given business day.
pub async fn find_public(pool: &SqlitePool, today: &str) -> RepoResult<Vec<SpecialOffer>> {
    let sql = format!(
        "{OFFER_SELECT} WHERE active = 1 AND valid_until >= ? ORDER BY sort_order, created_at DESC"
    );
    let offers = sqlx::query_as::<_, SpecialOffer>(&sql)
        .bind(today)
        .fetch_all(pool)
        .await?;
    Ok(offers
        .into_iter()
        .map(SpecialOffer::resolve_image)
        .collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<SpecialOffer>> {
    let sql = format!("{OFFER_SELECT} WHERE id = ?");
    let offer = sqlx::query_as::<_, SpecialOffer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(offer.map(SpecialOffer::resolve_image))
}

pub async fn create(pool: &SqlitePool, data: SpecialOfferCreate) -> RepoResult<SpecialOffer> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    let terms = serde_json::to_string(&data.terms.unwrap_or_default())
        .map_err(|e| RepoError::Validation(format!("Invalid terms: {e}")))?;
    sqlx::query(
        "INSERT INTO special_offer (id, title, description, discount, image_url, image_file_path, timing, valid_from, valid_until, terms, featured, active, sort_order, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.description)
    .bind(&data.discount)
    .bind(&data.image_url)
    .bind(&data.image_file_path)
    .bind(&data.timing)
    .bind(&data.valid_from)
    .bind(&data.valid_until)
    .bind(terms)
    .bind(data.featured.unwrap_or(false))
    .bind(data.active.unwrap_or(true))
    .bind(data.sort_order.unwrap_or(0))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create special offer".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: SpecialOfferUpdate) -> RepoResult<SpecialOffer> {
    let now = shared::util::now_millis();
    let terms = match &data.terms {
        Some(list) => Some(
            serde_json::to_string(list)
                .map_err(|e| RepoError::Validation(format!("Invalid terms: {e}")))?,
        ),
        None => None,
    };
    let rows = sqlx::query(
        "UPDATE special_offer SET \
            title = COALESCE(?1, title), \
            description = COALESCE(?2, description), \
            discount = COALESCE(?3, discount), \
            image_url = COALESCE(?4, image_url), \
            image_file_path = COALESCE(?5, image_file_path), \
            timing = COALESCE(?6, timing), \
            valid_from = COALESCE(?7, valid_from), \
            valid_until = COALESCE(?8, valid_until), \
            terms = COALESCE(?9, terms), \
            featured = COALESCE(?10, featured), \
            active = COALESCE(?11, active), \
            sort_order = COALESCE(?12, sort_order), \
            updated_at = ?13 \
         WHERE id = ?14",
    )
    .bind(&data.title)
    .bind(&data.description)
    .bind(&data.discount)
    .bind(&data.image_url)
    .bind(&data.image_file_path)
    .bind(&data.timing)
    .bind(&data.valid_from)
    .bind(&data.valid_until)
    .bind(terms)
    .bind(data.featured)
    .bind(data.active)
    .bind(data.sort_order)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Special offer {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Special offer {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM special_offer WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
