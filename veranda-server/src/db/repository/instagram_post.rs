//! Instagram Post Repository

use super::{RepoError, RepoResult};
use shared::models::{InstagramPost, InstagramPostCreate, InstagramPostUpdate, InstagramStatus};
use sqlx::SqlitePool;

const POST_SELECT: &str = "SELECT id, title, caption, description, image_url, image_file_path, instagram_url, hashtags, scheduled_date, status, likes, comments, featured, active, created_at, updated_at FROM instagram_post";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<InstagramPost>> {
    let sql = format!("{POST_SELECT} ORDER BY created_at DESC");
    let posts = sqlx::query_as::<_, InstagramPost>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(posts
        .into_iter()
        .map(InstagramPost::resolve_image)
        .collect())
}

/// Published, active posts for the public feed.
pub async fn find_public(pool: &SqlitePool) -> RepoResult<Vec<InstagramPost>> {
    let sql =
        format!("{POST_SELECT} WHERE active = 1 AND status = 'published' ORDER BY created_at DESC");
    let posts = sqlx::query_as::<_, InstagramPost>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(posts
        .into_iter()
        .map(InstagramPost::resolve_image)
        .collect())
}

pub async fn find_by_status(
    pool: &SqlitePool,
    status: InstagramStatus,
) -> RepoResult<Vec<InstagramPost>> {
    let sql = format!("{POST_SELECT} WHERE status = ? ORDER BY created_at DESC");
    let posts = sqlx::query_as::<_, InstagramPost>(&sql)
        .bind(status)
        .fetch_all(pool)
        .await?;
    Ok(posts
        .into_iter()
        .map(InstagramPost::resolve_image)
        .collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<InstagramPost>> {
    let sql = format!("{POST_SELECT} WHERE id = ?");
    let post = sqlx::query_as::<_, InstagramPost>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(post.map(InstagramPost::resolve_image))
}

pub async fn create(pool: &SqlitePool, data: InstagramPostCreate) -> RepoResult<InstagramPost> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    let hashtags = serde_json::to_string(&data.hashtags.unwrap_or_default())
        .map_err(|e| RepoError::Validation(format!("Invalid hashtags: {e}")))?;
    sqlx::query(
        "INSERT INTO instagram_post (id, title, caption, description, image_url, image_file_path, instagram_url, hashtags, scheduled_date, status, likes, comments, featured, active, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.title)
    .bind(&data.caption)
    .bind(&data.description)
    .bind(&data.image_url)
    .bind(&data.image_file_path)
    .bind(&data.instagram_url)
    .bind(hashtags)
    .bind(&data.scheduled_date)
    .bind(data.status.unwrap_or_default())
    .bind(data.likes.unwrap_or(0))
    .bind(data.comments.unwrap_or(0))
    .bind(data.featured.unwrap_or(false))
    .bind(data.active.unwrap_or(true))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create Instagram post".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: InstagramPostUpdate) -> RepoResult<InstagramPost> {
    let now = shared::util::now_millis();
    let hashtags = match &data.hashtags {
        Some(list) => Some(
            serde_json::to_string(list)
                .map_err(|e| RepoError::Validation(format!("Invalid hashtags: {e}")))?,
        ),
        None => None,
    };
    let rows = sqlx::query(
        "UPDATE instagram_post SET \
            title = COALESCE(?1, title), \
            caption = COALESCE(?2, caption), \
            description = COALESCE(?3, description), \
            image_url = COALESCE(?4, image_url), \
            image_file_path = COALESCE(?5, image_file_path), \
            instagram_url = COALESCE(?6, instagram_url), \
            hashtags = COALESCE(?7, hashtags), \
            scheduled_date = COALESCE(?8, scheduled_date), \
            status = COALESCE(?9, status), \
            likes = COALESCE(?10, likes), \
            comments = COALESCE(?11, comments), \
            featured = COALESCE(?12, featured), \
            active = COALESCE(?13, active), \
            updated_at = ?14 \
         WHERE id = ?15",
    )
    .bind(&data.title)
    .bind(&data.caption)
    .bind(&data.description)
    .bind(&data.image_url)
    .bind(&data.image_file_path)
    .bind(&data.instagram_url)
    .bind(hashtags)
    .bind(&data.scheduled_date)
    .bind(data.status)
    .bind(data.likes)
    .bind(data.comments)
    .bind(data.featured)
    .bind(data.active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Instagram post {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Instagram post {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM instagram_post WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn post(title: &str, status: Option<InstagramStatus>) -> InstagramPostCreate {
        InstagramPostCreate {
            title: title.into(),
            caption: "fresh out of the oven".into(),
            description: None,
            image_url: None,
            image_file_path: None,
            instagram_url: None,
            hashtags: Some(vec!["#sourdough".into()]),
            scheduled_date: None,
            status,
            likes: None,
            comments: None,
            featured: None,
            active: None,
        }
    }

    #[tokio::test]
    async fn new_posts_default_to_draft() {
        let db = DbService::in_memory().await.unwrap();
        let created = create(&db.pool, post("morning bake", None)).await.unwrap();
        assert_eq!(created.status, InstagramStatus::Draft);
        assert_eq!(created.hashtags, vec!["#sourdough"]);
    }

    #[tokio::test]
    async fn public_feed_only_shows_published() {
        let db = DbService::in_memory().await.unwrap();
        create(&db.pool, post("live", Some(InstagramStatus::Published)))
            .await
            .unwrap();
        create(&db.pool, post("queued", Some(InstagramStatus::Scheduled)))
            .await
            .unwrap();
        create(&db.pool, post("wip", None)).await.unwrap();

        let feed = find_public(&db.pool).await.unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].title, "live");

        let scheduled = find_by_status(&db.pool, InstagramStatus::Scheduled)
            .await
            .unwrap();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].title, "queued");
    }
}
