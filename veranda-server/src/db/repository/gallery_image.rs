//! Gallery Image Repository

use super::{RepoError, RepoResult, placeholders};
use shared::models::{GalleryImage, GalleryImageCreate, GalleryImageUpdate};
use sqlx::SqlitePool;

const GALLERY_SELECT: &str = "SELECT id, title, alt_text, description, image_url, image_file_path, category, featured, active, sort_order, created_at, updated_at FROM gallery_image";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<GalleryImage>> {
    let sql = format!("{GALLERY_SELECT} ORDER BY sort_order, created_at DESC");
    let images = sqlx::query_as::<_, GalleryImage>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(images
        .into_iter()
        .map(GalleryImage::resolve_image)
        .collect())
}

/// Active images for the public gallery.
pub async fn find_public(pool: &SqlitePool) -> RepoResult<Vec<GalleryImage>> {
    let sql = format!("{GALLERY_SELECT} WHERE active = 1 ORDER BY sort_order, created_at DESC");
    let images = sqlx::query_as::<_, GalleryImage>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(images
        .into_iter()
        .map(GalleryImage::resolve_image)
        .collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<GalleryImage>> {
    let sql = format!("{GALLERY_SELECT} WHERE id = ?");
    let image = sqlx::query_as::<_, GalleryImage>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(image.map(GalleryImage::resolve_image))
}

pub async fn create(pool: &SqlitePool, data: GalleryImageCreate) -> RepoResult<GalleryImage> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO gallery_image (id, title, alt_text, description, image_url, image_file_path, category, featured, active, sort_order, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.alt_text)
    .bind(&data.description)
    .bind(&data.image_url)
    .bind(&data.image_file_path)
    .bind(data.category.as_deref().unwrap_or("general"))
    .bind(data.featured.unwrap_or(false))
    .bind(data.active.unwrap_or(true))
    .bind(data.sort_order.unwrap_or(0))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create gallery image".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: GalleryImageUpdate) -> RepoResult<GalleryImage> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE gallery_image SET \
            title = COALESCE(?1, title), \
            alt_text = COALESCE(?2, alt_text), \
            description = COALESCE(?3, description), \
            image_url = COALESCE(?4, image_url), \
            image_file_path = COALESCE(?5, image_file_path), \
            category = COALESCE(?6, category), \
            featured = COALESCE(?7, featured), \
            active = COALESCE(?8, active), \
            sort_order = COALESCE(?9, sort_order), \
            updated_at = ?10 \
         WHERE id = ?11",
    )
    .bind(&data.title)
    .bind(&data.alt_text)
    .bind(&data.description)
    .bind(&data.image_url)
    .bind(&data.image_file_path)
    .bind(&data.category)
    .bind(data.featured)
    .bind(data.active)
    .bind(data.sort_order)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Gallery image {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Gallery image {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM gallery_image WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Deletes the given ids in one statement, returning how many rows went away.
pub async fn delete_many(pool: &SqlitePool, ids: &[i64]) -> RepoResult<u64> {
    if ids.is_empty() {
        return Ok(0);
    }
    let sql = format!(
        "DELETE FROM gallery_image WHERE id IN ({})",
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

    fn shot(title: &str, sort_order: i64) -> GalleryImageCreate {
        GalleryImageCreate {
            title: title.into(),
            alt_text: None,
            description: None,
            image_url: Some(format!("https://cdn.example.com/{title}.jpg")),
            image_file_path: None,
            category: None,
            featured: None,
            active: None,
            sort_order: Some(sort_order),
        }
    }

    #[tokio::test]
    async fn listing_orders_by_sort_order() {
        let db = DbService::in_memory().await.unwrap();
        create(&db.pool, shot("terrace", 2)).await.unwrap();
        create(&db.pool, shot("kitchen", 1)).await.unwrap();

        let all = find_all(&db.pool).await.unwrap();
        assert_eq!(all[0].title, "kitchen");
        assert_eq!(all[1].title, "terrace");
        assert_eq!(all[0].category, "general");
    }

    #[tokio::test]
    async fn delete_many_removes_only_requested_ids() {
        let db = DbService::in_memory().await.unwrap();
        let a = create(&db.pool, shot("a", 0)).await.unwrap();
        let b = create(&db.pool, shot("b", 0)).await.unwrap();
        let c = create(&db.pool, shot("c", 0)).await.unwrap();

        let removed = delete_many(&db.pool, &[a.id, c.id, 999]).await.unwrap();
        assert_eq!(removed, 2);
        let left = find_all(&db.pool).await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, b.id);

        assert_eq!(delete_many(&db.pool, &[]).await.unwrap(), 0);
    }
}
