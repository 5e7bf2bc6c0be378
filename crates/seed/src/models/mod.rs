//! Domain types for the seeded tables.
//!
//! `New*` types describe rows before insertion; the plain types are rows read
//! back with their generated identifiers.

pub mod catalog;
pub mod identity;

pub use catalog::{
    CatalogCounts, Category, Combo, ComboItem, FoodItem, NewCategory, NewCombo, NewFoodItem,
};
pub use identity::{NewUser, Role, User};
