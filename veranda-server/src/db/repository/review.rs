//! Review Repository

use super::{RepoError, RepoResult, placeholders};
use shared::models::{
    RatingBucket, Review, ReviewCreate, ReviewStats, ReviewStatus, ReviewSubmit, ReviewUpdate,
};
use sqlx::SqlitePool;

const REVIEW_SELECT: &str = "SELECT id, customer_name, customer_email, review_text, rating, status, admin_notes, featured, display_order, created_at, updated_at FROM review";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Review>> {
    let sql = format!("{REVIEW_SELECT} ORDER BY created_at DESC");
    Ok(sqlx::query_as::<_, Review>(&sql).fetch_all(pool).await?)
}

pub async fn find_by_status(pool: &SqlitePool, status: ReviewStatus) -> RepoResult<Vec<Review>> {
    let sql = format!("{REVIEW_SELECT} WHERE status = ? ORDER BY created_at DESC");
    Ok(sqlx::query_as::<_, Review>(&sql)
        .bind(status)
        .fetch_all(pool)
        .await?)
}

/// Approved reviews for the public site, curated order first.
pub async fn find_approved(pool: &SqlitePool) -> RepoResult<Vec<Review>> {
    let sql = format!(
        "{REVIEW_SELECT} WHERE status = 'approved' ORDER BY display_order, created_at DESC"
    );
    Ok(sqlx::query_as::<_, Review>(&sql).fetch_all(pool).await?)
}

pub async fn find_featured(pool: &SqlitePool) -> RepoResult<Vec<Review>> {
    let sql = format!(
        "{REVIEW_SELECT} WHERE status = 'approved' AND featured = 1 ORDER BY display_order, created_at DESC"
    );
    Ok(sqlx::query_as::<_, Review>(&sql).fetch_all(pool).await?)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Review>> {
    let sql = format!("{REVIEW_SELECT} WHERE id = ?");
    Ok(sqlx::query_as::<_, Review>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?)
}

/// Public submission; always lands in the moderation queue.
pub async fn submit(pool: &SqlitePool, data: ReviewSubmit) -> RepoResult<Review> {
    insert(
        pool,
        ReviewCreate {
            customer_name: data.customer_name,
            customer_email: data.customer_email,
            review_text: data.review_text,
            rating: data.rating,
            status: Some(ReviewStatus::Pending),
            admin_notes: None,
            featured: None,
            display_order: None,
        },
    )
    .await
}

/// Admin-authored review; published immediately unless told otherwise.
pub async fn create(pool: &SqlitePool, mut data: ReviewCreate) -> RepoResult<Review> {
    data.status.get_or_insert(ReviewStatus::Approved);
    insert(pool, data).await
}

async fn insert(pool: &SqlitePool, data: ReviewCreate) -> RepoResult<Review> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO review (id, customer_name, customer_email, review_text, rating, status, admin_notes, featured, display_order, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.customer_name)
    .bind(&data.customer_email)
    .bind(&data.review_text)
    .bind(data.rating)
    .bind(data.status.unwrap_or(ReviewStatus::Pending))
    .bind(&data.admin_notes)
    .bind(data.featured.unwrap_or(false))
    .bind(data.display_order.unwrap_or(0))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create review".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ReviewUpdate) -> RepoResult<Review> {
    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE review SET \
            customer_name = COALESCE(?1, customer_name), \
            customer_email = COALESCE(?2, customer_email), \
            review_text = COALESCE(?3, review_text), \
            rating = COALESCE(?4, rating), \
            status = COALESCE(?5, status), \
            admin_notes = COALESCE(?6, admin_notes), \
            featured = COALESCE(?7, featured), \
            display_order = COALESCE(?8, display_order), \
            updated_at = ?9 \
         WHERE id = ?10",
    )
    .bind(&data.customer_name)
    .bind(&data.customer_email)
    .bind(&data.review_text)
    .bind(data.rating)
    .bind(data.status)
    .bind(&data.admin_notes)
    .bind(data.featured)
    .bind(data.display_order)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Review {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Review {id} not found")))
}

pub async fn set_status(pool: &SqlitePool, id: i64, status: ReviewStatus) -> RepoResult<Review> {
    update(
        pool,
        id,
        ReviewUpdate {
            status: Some(status),
            ..Default::default()
        },
    )
    .await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM review WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

pub async fn delete_many(pool: &SqlitePool, ids: &[i64]) -> RepoResult<u64> {
    if ids.is_empty() {
        return Ok(0);
    }
    let sql = format!("DELETE FROM review WHERE id IN ({})", placeholders(ids.len()));
    let mut query = sqlx::query(&sql);
    for id in ids {
        query = query.bind(id);
    }
    let rows = query.execute(pool).await?;
    Ok(rows.rows_affected())
}

/// One-pass aggregate over the whole table. `now_ms` anchors the
/// 24-hour "recent" window so callers control the clock.
pub async fn stats(pool: &SqlitePool, now_ms: i64) -> RepoResult<ReviewStats> {
    let stats = sqlx::query_as::<_, ReviewStats>(
        "SELECT \
            COUNT(*) AS total, \
            COALESCE(SUM(status = 'approved'), 0) AS approved, \
            COALESCE(SUM(status = 'pending'), 0) AS pending, \
            COALESCE(SUM(status = 'rejected'), 0) AS rejected, \
            COALESCE(AVG(rating), 0.0) AS average_rating, \
            COALESCE(SUM(featured = 1), 0) AS featured, \
            COALESCE(SUM(created_at >= ?), 0) AS recent \
         FROM review",
    )
    .bind(now_ms - 24 * 60 * 60 * 1000)
    .fetch_one(pool)
    .await?;
    Ok(stats)
}

/// Histogram of ratings 1..=5; buckets with no reviews are still present.
pub async fn rating_distribution(pool: &SqlitePool) -> RepoResult<Vec<RatingBucket>> {
    let counted = sqlx::query_as::<_, RatingBucket>(
        "SELECT rating, COUNT(*) AS count FROM review GROUP BY rating",
    )
    .fetch_all(pool)
    .await?;
    let mut buckets: Vec<RatingBucket> = (1..=5)
        .map(|rating| RatingBucket { rating, count: 0 })
        .collect();
    for row in counted {
        if (1..=5).contains(&row.rating) {
            buckets[(row.rating - 1) as usize].count = row.count;
        }
    }
    Ok(buckets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn submission(name: &str, rating: i64) -> ReviewSubmit {
        ReviewSubmit {
            customer_name: name.into(),
            customer_email: None,
            review_text: "Lovely evening, great service.".into(),
            rating,
        }
    }

    #[tokio::test]
    async fn public_submissions_queue_as_pending() {
        let db = DbService::in_memory().await.unwrap();
        let review = submit(&db.pool, submission("alice", 5)).await.unwrap();
        assert_eq!(review.status, ReviewStatus::Pending);

        let admin = create(
            &db.pool,
            ReviewCreate {
                customer_name: "staff pick".into(),
                customer_email: None,
                review_text: "House favourite.".into(),
                rating: 5,
                status: None,
                admin_notes: None,
                featured: Some(true),
                display_order: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(admin.status, ReviewStatus::Approved);

        let approved = find_approved(&db.pool).await.unwrap();
        assert_eq!(approved.len(), 1);
        assert_eq!(find_featured(&db.pool).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn stats_average_and_recency_window() {
        let db = DbService::in_memory().await.unwrap();
        for (name, rating) in [("a", 5), ("b", 4), ("c", 3), ("d", 5), ("e", 1)] {
            submit(&db.pool, submission(name, rating)).await.unwrap();
        }
        let now = shared::util::now_millis();
        let s = stats(&db.pool, now).await.unwrap();
        assert_eq!(s.total, 5);
        assert_eq!(s.pending, 5);
        assert_eq!(s.approved, 0);
        assert!((s.average_rating - 3.6).abs() < 1e-9);
        assert_eq!(s.recent, 5);

        // nothing is recent relative to a clock two days ahead
        let later = stats(&db.pool, now + 48 * 60 * 60 * 1000).await.unwrap();
        assert_eq!(later.recent, 0);
    }

    #[tokio::test]
    async fn stats_on_empty_table_is_all_zero() {
        let db = DbService::in_memory().await.unwrap();
        let s = stats(&db.pool, shared::util::now_millis()).await.unwrap();
        assert_eq!(s.total, 0);
        assert_eq!(s.average_rating, 0.0);
    }

    #[tokio::test]
    async fn distribution_always_has_five_buckets() {
        let db = DbService::in_memory().await.unwrap();
        submit(&db.pool, submission("a", 5)).await.unwrap();
        submit(&db.pool, submission("b", 5)).await.unwrap();
        submit(&db.pool, submission("c", 2)).await.unwrap();

        let buckets = rating_distribution(&db.pool).await.unwrap();
        assert_eq!(buckets.len(), 5);
        assert_eq!(buckets[4].count, 2);
        assert_eq!(buckets[1].count, 1);
        assert_eq!(buckets[0].count, 0);
    }

    #[tokio::test]
    async fn moderation_flow() {
        let db = DbService::in_memory().await.unwrap();
        let review = submit(&db.pool, submission("alice", 4)).await.unwrap();
        let approved = set_status(&db.pool, review.id, ReviewStatus::Approved)
            .await
            .unwrap();
        assert_eq!(approved.status, ReviewStatus::Approved);
        let rejected = set_status(&db.pool, review.id, ReviewStatus::Rejected)
            .await
            .unwrap();
        assert_eq!(rejected.status, ReviewStatus::Rejected);
        assert!(find_approved(&db.pool).await.unwrap().is_empty());
    }
}
