//! Catalog repository for database operations.
//!
//! Each insert method commits its whole batch in one transaction. Unique
//! names make every insert an `ON CONFLICT DO NOTHING` upsert, so a batch
//! replayed against a partially seeded table only adds what is missing.

use sqlx::PgPool;

use fastfood_core::{ComboId, FoodItemId};

use super::{CatalogStore, RepositoryError};
use crate::models::{
    CatalogCounts, Category, Combo, ComboItem, FoodItem, NewCategory, NewCombo, NewFoodItem,
};

#[derive(Debug, sqlx::FromRow)]
struct CountsRow {
    categories: i64,
    food_items: i64,
    combos: i64,
    combo_items: i64,
}

impl From<CountsRow> for CatalogCounts {
    fn from(row: CountsRow) -> Self {
        Self {
            categories: row.categories,
            food_items: row.food_items,
            combos: row.combos,
            combo_items: row.combo_items,
        }
    }
}

/// Repository for catalog database operations.
pub struct CatalogRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CatalogRepository<'a> {
    /// Create a new catalog repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every food item, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_food_items(&self) -> Result<Vec<FoodItem>, RepositoryError> {
        let items = sqlx::query_as::<_, FoodItem>(
            r"
            SELECT id, category_id, name, description, price, image_url, status
            FROM food_items
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }
}

impl CatalogStore for CatalogRepository<'_> {
    async fn counts(&self) -> Result<CatalogCounts, RepositoryError> {
        let row = sqlx::query_as::<_, CountsRow>(
            r"
            SELECT
                (SELECT COUNT(*) FROM categories)  AS categories,
                (SELECT COUNT(*) FROM food_items)  AS food_items,
                (SELECT COUNT(*) FROM combos)      AS combos,
                (SELECT COUNT(*) FROM combo_items) AS combo_items
            ",
        )
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }

    async fn insert_categories(
        &self,
        categories: &[NewCategory],
    ) -> Result<Vec<Category>, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(categories.len());

        for category in categories {
            let row = sqlx::query_as::<_, Category>(
                r"
                INSERT INTO categories (name)
                VALUES ($1)
                ON CONFLICT (name) DO NOTHING
                RETURNING id, name
                ",
            )
            .bind(&category.name)
            .fetch_optional(&mut *tx)
            .await?;

            inserted.extend(row);
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError> {
        let row = sqlx::query_as::<_, Category>(
            r"
            SELECT id, name
            FROM categories
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    async fn insert_food_items(
        &self,
        items: &[NewFoodItem],
    ) -> Result<Vec<FoodItem>, RepositoryError> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(items.len());

        for item in items {
            let row = sqlx::query_as::<_, FoodItem>(
                r"
                INSERT INTO food_items (category_id, name, description, price, image_url, status)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (name) DO NOTHING
                RETURNING id, category_id, name, description, price, image_url, status
                ",
            )
            .bind(item.category_id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.price)
            .bind(&item.image_url)
            .bind(item.status)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| RepositoryError::from_insert(e, "food item"))?;

            inserted.extend(row);
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn find_food_item_by_name(&self, name: &str) -> Result<Option<FoodItem>, RepositoryError> {
        let row = sqlx::query_as::<_, FoodItem>(
            r"
            SELECT id, category_id, name, description, price, image_url, status
            FROM food_items
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    async fn insert_combo(
        &self,
        combo: &NewCombo,
        items: &[(FoodItemId, i32)],
    ) -> Result<Option<Combo>, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let Some(created) = sqlx::query_as::<_, Combo>(
            r"
            INSERT INTO combos (name, description, price)
            VALUES ($1, $2, $3)
            ON CONFLICT (name) DO NOTHING
            RETURNING id, name, description, price
            ",
        )
        .bind(&combo.name)
        .bind(&combo.description)
        .bind(combo.price)
        .fetch_optional(&mut *tx)
        .await?
        else {
            return Ok(None);
        };

        for &(food_item_id, quantity) in items {
            sqlx::query(
                r"
                INSERT INTO combo_items (combo_id, food_item_id, quantity)
                VALUES ($1, $2, $3)
                ON CONFLICT (combo_id, food_item_id) DO NOTHING
                ",
            )
            .bind(created.id)
            .bind(food_item_id)
            .bind(quantity)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepositoryError::from_insert(e, "combo item"))?;
        }

        tx.commit().await?;
        Ok(Some(created))
    }

    async fn find_combo_by_name(&self, name: &str) -> Result<Option<Combo>, RepositoryError> {
        let row = sqlx::query_as::<_, Combo>(
            r"
            SELECT id, name, description, price
            FROM combos
            WHERE name = $1
            ",
        )
        .bind(name)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    async fn list_combo_items(&self, combo_id: ComboId) -> Result<Vec<ComboItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, ComboItem>(
            r"
            SELECT combo_id, food_item_id, quantity
            FROM combo_items
            WHERE combo_id = $1
            ORDER BY food_item_id
            ",
        )
        .bind(combo_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
