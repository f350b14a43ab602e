//! Menu Item Repository

use super::{RepoError, RepoResult};
use shared::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use sqlx::SqlitePool;

const MENU_SELECT: &str = "SELECT id, name, description, price, category, image_url, image_file_path, available, featured, ingredients, prep_time, calories, rating, created_at, updated_at FROM menu_item";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let sql = format!("{MENU_SELECT} ORDER BY created_at DESC");
    let items = sqlx::query_as::<_, MenuItem>(&sql).fetch_all(pool).await?;
    Ok(items.into_iter().map(MenuItem::resolve_image).collect())
}

/// Available items for the public menu.
pub async fn find_public(pool: &SqlitePool) -> RepoResult<Vec<MenuItem>> {
    let sql = format!("{MENU_SELECT} WHERE available = 1 ORDER BY category, name");
    let items = sqlx::query_as::<_, MenuItem>(&sql).fetch_all(pool).await?;
    Ok(items.into_iter().map(MenuItem::resolve_image).collect())
}

pub async fn find_by_category(pool: &SqlitePool, category: &str) -> RepoResult<Vec<MenuItem>> {
    let sql = format!("{MENU_SELECT} WHERE category = ? ORDER BY name");
    let items = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(category)
        .fetch_all(pool)
        .await?;
    Ok(items.into_iter().map(MenuItem::resolve_image).collect())
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<MenuItem>> {
    let sql = format!("{MENU_SELECT} WHERE id = ?");
    let item = sqlx::query_as::<_, MenuItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item.map(MenuItem::resolve_image))
}

pub async fn create(pool: &SqlitePool, data: MenuItemCreate) -> RepoResult<MenuItem> {
    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    let ingredients = serde_json::to_string(&data.ingredients.unwrap_or_default())
        .map_err(|e| RepoError::Validation(format!("Invalid ingredients: {e}")))?;
    sqlx::query(
        "INSERT INTO menu_item (id, name, description, price, category, image_url, image_file_path, available, featured, ingredients, prep_time, calories, rating, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(&data.category)
    .bind(&data.image_url)
    .bind(&data.image_file_path)
    .bind(data.available.unwrap_or(true))
    .bind(data.featured.unwrap_or(false))
    .bind(ingredients)
    .bind(&data.prep_time)
    .bind(data.calories.unwrap_or(0))
    .bind(data.rating.unwrap_or(0.0))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create menu item".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: MenuItemUpdate) -> RepoResult<MenuItem> {
    let now = shared::util::now_millis();
    let ingredients = match &data.ingredients {
        Some(list) => Some(
            serde_json::to_string(list)
                .map_err(|e| RepoError::Validation(format!("Invalid ingredients: {e}")))?,
        ),
        None => None,
    };
    let rows = sqlx::query(
        "UPDATE menu_item SET \
            name = COALESCE(?1, name), \
            description = COALESCE(?2, description), \
            price = COALESCE(?3, price), \
            category = COALESCE(?4, category), \
            image_url = COALESCE(?5, image_url), \
            image_file_path = COALESCE(?6, image_file_path), \
            available = COALESCE(?7, available), \
            featured = COALESCE(?8, featured), \
            ingredients = COALESCE(?9, ingredients), \
            prep_time = COALESCE(?10, prep_time), \
            calories = COALESCE(?11, calories), \
            rating = COALESCE(?12, rating), \
            updated_at = ?13 \
         WHERE id = ?14",
    )
    .bind(&data.name)
    .bind(&data.description)
    .bind(data.price)
    .bind(&data.category)
    .bind(&data.image_url)
    .bind(&data.image_file_path)
    .bind(data.available)
    .bind(data.featured)
    .bind(ingredients)
    .bind(&data.prep_time)
    .bind(data.calories)
    .bind(data.rating)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Menu item {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Menu item {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM menu_item WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn plate(name: &str, category: &str, available: bool) -> MenuItemCreate {
        MenuItemCreate {
            name: name.into(),
            description: String::new(),
            price: 12.5,
            category: category.into(),
            image_url: None,
            image_file_path: None,
            available: Some(available),
            featured: None,
            ingredients: Some(vec!["tomato".into(), "basil".into()]),
            prep_time: Some("15 mins".into()),
            calories: Some(420),
            rating: None,
        }
    }

    #[tokio::test]
    async fn ingredients_round_trip_through_json_column() {
        let db = DbService::in_memory().await.unwrap();
        let item = create(&db.pool, plate("Bruschetta", "starters", true))
            .await
            .unwrap();
        assert_eq!(item.ingredients, vec!["tomato", "basil"]);

        let updated = update(
            &db.pool,
            item.id,
            MenuItemUpdate {
                ingredients: Some(vec!["tomato".into()]),
                ..Default::default()
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.ingredients, vec!["tomato"]);
        assert_eq!(updated.prep_time.as_deref(), Some("15 mins"));
    }

    #[tokio::test]
    async fn public_listing_excludes_unavailable() {
        let db = DbService::in_memory().await.unwrap();
        create(&db.pool, plate("Carbonara", "mains", true))
            .await
            .unwrap();
        create(&db.pool, plate("Oysters", "seasonal", false))
            .await
            .unwrap();

        let public = find_public(&db.pool).await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].name, "Carbonara");
        assert_eq!(find_all(&db.pool).await.unwrap().len(), 2);
    }
}
