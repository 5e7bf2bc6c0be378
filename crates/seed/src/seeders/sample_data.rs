//! Sample catalog seeder.
//!
//! Three steps, each guarded by an emptiness check on its own table:
//! categories, then food items (resolving categories by name), then the
//! combo (resolving food items by name). A step whose table already holds
//! rows does nothing, even if those rows are not the sample ones.

use std::collections::HashMap;

use fastfood_core::{CategoryId, FoodItemId, ItemStatus, Price};

use super::SeedError;
use crate::db::CatalogStore;
use crate::models::{NewCategory, NewCombo, NewFoodItem};

/// Sweets category.
pub const SWEETS: &str = "Bánh ngọt";
/// Drinks category.
pub const DRINKS: &str = "Đồ uống";

/// Seeded categories, in insertion order.
pub const SAMPLE_CATEGORIES: [&str; 2] = [SWEETS, DRINKS];

pub const FLAN: &str = "Bánh Flan";
pub const CREAM_PUFF: &str = "Bánh Su Kem";
pub const BUBBLE_MILK_TEA: &str = "Trà Sữa Trân Châu";

/// The seeded combo.
pub const FLAN_MILK_TEA_COMBO: &str = "Combo Bánh Flan + Trà Sữa";

struct SampleItem {
    name: &'static str,
    description: &'static str,
    cents: i64,
    category: &'static str,
    image_url: &'static str,
}

const SAMPLE_ITEMS: [SampleItem; 3] = [
    SampleItem {
        name: FLAN,
        description: "Bánh caramel mềm mịn, thơm ngon.",
        cents: 299,
        category: SWEETS,
        image_url: "/images/flan.jpg",
    },
    SampleItem {
        name: CREAM_PUFF,
        description: "Nhân kem béo ngậy, lớp vỏ vàng giòn.",
        cents: 349,
        category: SWEETS,
        image_url: "/images/sk.jpg",
    },
    SampleItem {
        name: BUBBLE_MILK_TEA,
        description: "Trà sữa thơm béo kèm trân châu dẻo dai.",
        cents: 250,
        category: DRINKS,
        image_url: "/images/tstc.jpg",
    },
];

const COMBO_DESCRIPTION: &str = "Kết hợp ngọt ngào giữa bánh và trà sữa.";
const COMBO_CENTS: i64 = 499;

/// Combo members and their quantities.
const COMBO_ITEMS: [(&str, i32); 2] = [(FLAN, 1), (BUBBLE_MILK_TEA, 1)];

/// Seed categories, food items and the combo, in that order.
///
/// # Errors
///
/// Returns the first [`SeedError`] from any step.
pub async fn seed_sample_data<C: CatalogStore>(catalog: &C) -> Result<(), SeedError> {
    seed_categories(catalog).await?;
    seed_food_items(catalog).await?;
    seed_combos(catalog).await?;
    Ok(())
}

/// Insert the sample categories if the category table is empty.
///
/// # Errors
///
/// Returns [`SeedError::Repository`] if the store fails.
pub async fn seed_categories<C: CatalogStore>(catalog: &C) -> Result<(), SeedError> {
    if catalog.counts().await?.categories > 0 {
        tracing::debug!("Categories present, skipping");
        return Ok(());
    }

    let new: Vec<NewCategory> = SAMPLE_CATEGORIES
        .iter()
        .map(|&name| NewCategory {
            name: name.to_owned(),
        })
        .collect();

    let inserted = catalog.insert_categories(&new).await?;
    tracing::info!(count = inserted.len(), "Seeded categories");
    Ok(())
}

/// Insert the sample food items if the food item table is empty.
///
/// # Errors
///
/// Returns [`SeedError::MissingCategory`] without inserting anything if a
/// sample category is absent, and [`SeedError::Repository`] if the store
/// fails.
pub async fn seed_food_items<C: CatalogStore>(catalog: &C) -> Result<(), SeedError> {
    if catalog.counts().await?.food_items > 0 {
        tracing::debug!("Food items present, skipping");
        return Ok(());
    }

    let mut categories: HashMap<&str, CategoryId> = HashMap::new();
    let mut new = Vec::with_capacity(SAMPLE_ITEMS.len());

    for item in &SAMPLE_ITEMS {
        let category_id = if let Some(&id) = categories.get(item.category) {
            id
        } else {
            let category = catalog
                .find_category_by_name(item.category)
                .await?
                .ok_or_else(|| SeedError::MissingCategory(item.category.to_owned()))?;
            categories.insert(item.category, category.id);
            category.id
        };

        new.push(NewFoodItem {
            category_id,
            name: item.name.to_owned(),
            description: item.description.to_owned(),
            price: Price::from_cents(item.cents)?,
            image_url: item.image_url.to_owned(),
            status: ItemStatus::Available,
        });
    }

    let inserted = catalog.insert_food_items(&new).await?;
    tracing::info!(count = inserted.len(), "Seeded food items");
    Ok(())
}

/// Insert the sample combo and its members if the combo table is empty.
///
/// Members are resolved by name before anything is written, so running this
/// ahead of [`seed_food_items`] fails cleanly instead of leaving an empty
/// combo behind.
///
/// # Errors
///
/// Returns [`SeedError::MissingFoodItem`] if a member has not been seeded,
/// and [`SeedError::Repository`] if the store fails.
pub async fn seed_combos<C: CatalogStore>(catalog: &C) -> Result<(), SeedError> {
    if catalog.counts().await?.combos > 0 {
        tracing::debug!("Combos present, skipping");
        return Ok(());
    }

    let mut members: Vec<(FoodItemId, i32)> = Vec::with_capacity(COMBO_ITEMS.len());
    for (name, quantity) in COMBO_ITEMS {
        let item = catalog
            .find_food_item_by_name(name)
            .await?
            .ok_or_else(|| SeedError::MissingFoodItem(name.to_owned()))?;
        members.push((item.id, quantity));
    }

    let combo = NewCombo {
        name: FLAN_MILK_TEA_COMBO.to_owned(),
        description: COMBO_DESCRIPTION.to_owned(),
        price: Price::from_cents(COMBO_CENTS)?,
    };

    match catalog.insert_combo(&combo, &members).await? {
        Some(created) => tracing::info!(
            combo_id = %created.id,
            name = %created.name,
            items = members.len(),
            "Seeded combo"
        ),
        None => tracing::debug!(name = %combo.name, "Combo already exists"),
    }

    Ok(())
}
