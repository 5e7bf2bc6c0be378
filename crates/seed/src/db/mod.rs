//! Storage collaborators for the seeders.
//!
//! # Database: `fastfood` (`PostgreSQL`)
//!
//! ## Tables
//!
//! - `roles` - Authorization groups, unique by normalized name
//! - `users` - Accounts, unique by normalized email and normalized user name
//! - `user_roles` - Role assignments
//! - `categories` - Menu groupings, unique by name
//! - `food_items` - Orderable items, unique by name
//! - `combos` - Priced bundles, unique by name
//! - `combo_items` - Combo membership with quantity
//!
//! # Seams
//!
//! The seeders only see the [`RoleStore`], [`UserStore`] and
//! [`CatalogStore`] traits. [`RoleRepository`], [`UserRepository`] and
//! [`CatalogRepository`] implement them over a `PgPool`; [`MemoryStore`]
//! implements all three in process.
//!
//! # Migrations
//!
//! Migrations live in `crates/seed/migrations/` and are embedded at build
//! time:
//! ```bash
//! cargo run -p fastfood-cli -- migrate
//! ```

pub mod catalog;
pub mod memory;
pub mod roles;
pub mod users;

use std::future::Future;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use fastfood_core::{ComboId, Email, FoodItemId, RoleName, UserId};

use crate::models::{
    CatalogCounts, Category, Combo, ComboItem, FoodItem, NewCategory, NewCombo, NewFoodItem,
    NewUser, Role, User,
};

pub use catalog::CatalogRepository;
pub use memory::MemoryStore;
pub use roles::RoleRepository;
pub use users::UserRepository;

/// Embedded schema migrations.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),

    /// A role referenced by an assignment does not exist.
    #[error("role not found: {0}")]
    RoleNotFound(String),

    /// A row references a missing parent or fails a check constraint.
    #[error("invalid row: {0}")]
    ConstraintViolation(String),
}

impl RepositoryError {
    /// Map a unique violation to [`RepositoryError::Conflict`], foreign key
    /// and check violations to [`RepositoryError::ConstraintViolation`],
    /// anything else to [`RepositoryError::Database`].
    pub(crate) fn from_insert(err: sqlx::Error, what: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.is_unique_violation() {
                return Self::Conflict(format!("{what} already exists"));
            }
            if db_err.is_foreign_key_violation() {
                return Self::ConstraintViolation(format!("{what} references a missing row"));
            }
            if db_err.is_check_violation() {
                return Self::ConstraintViolation(format!("{what} violates a check constraint"));
            }
        }
        Self::Database(err)
    }
}

// =============================================================================
// Collaborator Traits
// =============================================================================

/// Role management.
pub trait RoleStore {
    /// Look a role up by name (case-insensitive).
    fn find_role(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Role>, RepositoryError>> + Send;

    /// Insert a role unless one with the same normalized name exists.
    ///
    /// Returns the new role, or `None` if it already existed.
    fn create_role_if_absent(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Role>, RepositoryError>> + Send;
}

/// User account management.
pub trait UserStore {
    /// Look an account up by its email exactly as stored.
    fn find_by_email(
        &self,
        email: &Email,
    ) -> impl Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Look an account up by its normalized (uppercase) email.
    fn find_by_normalized_email(
        &self,
        normalized_email: &str,
    ) -> impl Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Create an account and assign it `role` as one unit.
    ///
    /// Fails with [`RepositoryError::Conflict`] if the normalized email or
    /// user name is taken, and with [`RepositoryError::RoleNotFound`] if the
    /// role has not been seeded. Neither failure leaves a partial account.
    fn create_with_role(
        &self,
        user: &NewUser,
        role: RoleName,
    ) -> impl Future<Output = Result<User, RepositoryError>> + Send;

    /// Names of the roles assigned to an account, sorted.
    fn roles_for(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<String>, RepositoryError>> + Send;
}

/// Catalog persistence.
pub trait CatalogStore {
    /// Row counts of every catalog table.
    fn counts(&self) -> impl Future<Output = Result<CatalogCounts, RepositoryError>> + Send;

    /// Insert categories in one commit, skipping names that already exist.
    fn insert_categories(
        &self,
        categories: &[NewCategory],
    ) -> impl Future<Output = Result<Vec<Category>, RepositoryError>> + Send;

    /// Look a category up by exact name.
    fn find_category_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Category>, RepositoryError>> + Send;

    /// Insert food items in one commit, skipping names that already exist.
    ///
    /// An unknown category fails the whole batch with
    /// [`RepositoryError::ConstraintViolation`].
    fn insert_food_items(
        &self,
        items: &[NewFoodItem],
    ) -> impl Future<Output = Result<Vec<FoodItem>, RepositoryError>> + Send;

    /// Look a food item up by exact name.
    fn find_food_item_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<FoodItem>, RepositoryError>> + Send;

    /// Insert a combo and its `(food item, quantity)` members in one commit.
    ///
    /// Returns `None` without touching the members if a combo with the same
    /// name already exists. An unknown food item or a non-positive quantity
    /// fails with [`RepositoryError::ConstraintViolation`] and writes nothing.
    fn insert_combo(
        &self,
        combo: &NewCombo,
        items: &[(FoodItemId, i32)],
    ) -> impl Future<Output = Result<Option<Combo>, RepositoryError>> + Send;

    /// Look a combo up by exact name.
    fn find_combo_by_name(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Combo>, RepositoryError>> + Send;

    /// Members of a combo, ordered by food item.
    fn list_combo_items(
        &self,
        combo_id: ComboId,
    ) -> impl Future<Output = Result<Vec<ComboItem>, RepositoryError>> + Send;
}

// =============================================================================
// Pool & Migrations
// =============================================================================

/// Create a `PostgreSQL` connection pool.
///
/// Seeding runs sequentially, so the pool stays small.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Apply any pending schema migrations.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails or the recorded history does
/// not match the embedded files.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
