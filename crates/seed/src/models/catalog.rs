//! Catalog domain types: categories, food items, combos.

use serde::Serialize;

use fastfood_core::{CategoryId, ComboId, FoodItemId, ItemStatus, Price};

/// A grouping of food items on the menu.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A category to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
}

/// A single orderable item.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct FoodItem {
    pub id: FoodItemId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Path of the item's image, relative to the web root.
    pub image_url: String,
    pub status: ItemStatus,
}

/// A food item to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFoodItem {
    pub category_id: CategoryId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image_url: String,
    pub status: ItemStatus,
}

/// A named, priced bundle of food items.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Combo {
    pub id: ComboId,
    pub name: String,
    pub description: String,
    pub price: Price,
}

/// A combo to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCombo {
    pub name: String,
    pub description: String,
    pub price: Price,
}

/// Membership of a food item in a combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::FromRow)]
pub struct ComboItem {
    pub combo_id: ComboId,
    pub food_item_id: FoodItemId,
    pub quantity: i32,
}

/// Row counts of the catalog tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogCounts {
    pub categories: i64,
    pub food_items: i64,
    pub combos: i64,
    pub combo_items: i64,
}
