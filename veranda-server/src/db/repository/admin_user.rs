//! Admin User Repository

use super::{RepoError, RepoResult};
use shared::models::AdminUser;
use sqlx::SqlitePool;

const USER_SELECT: &str =
    "SELECT id, username, password_hash, display_name, created_at, updated_at FROM admin_user";

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<AdminUser>> {
    let sql = format!("{USER_SELECT} WHERE username = ?");
    Ok(sqlx::query_as::<_, AdminUser>(&sql)
        .bind(username)
        .fetch_optional(pool)
        .await?)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<AdminUser>> {
    let sql = format!("{USER_SELECT} WHERE id = ?");
    Ok(sqlx::query_as::<_, AdminUser>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    Ok(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admin_user")
        .fetch_one(pool)
        .await?)
}

pub async fn create(
    pool: &SqlitePool,
    username: &str,
    password_hash: &str,
    display_name: &str,
) -> RepoResult<AdminUser> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO admin_user (id, username, password_hash, display_name, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(username)
    .bind(password_hash)
    .bind(display_name)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create admin user".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    #[tokio::test]
    async fn usernames_are_unique() {
        let db = DbService::in_memory().await.unwrap();
        assert_eq!(count(&db.pool).await.unwrap(), 0);
        create(&db.pool, "admin", "$argon2id$stub", "Admin").await.unwrap();
        assert_eq!(count(&db.pool).await.unwrap(), 1);

        let dup = create(&db.pool, "admin", "$argon2id$stub", "Admin").await;
        assert!(matches!(dup, Err(RepoError::Duplicate(_))));

        let found = find_by_username(&db.pool, "admin").await.unwrap().unwrap();
        assert_eq!(found.display_name, "Admin");
        assert!(find_by_username(&db.pool, "ghost").await.unwrap().is_none());
    }
}
