//! Startup seeders.
//!
//! Three independent, idempotent procedures:
//!
//! 1. [`seed_roles`] - every [`RoleName`](fastfood_core::RoleName)
//! 2. [`seed_admin_user`] - the configured administrator account
//! 3. [`seed_sample_data`] - sample categories, food items and a combo
//!
//! They share no state. [`run_seeders`] runs them in the order above, which
//! matters only because the administrator is assigned the `Admin` role.
//! Each step commits on its own; a failure leaves earlier steps in place and
//! a rerun picks up where it stopped.

pub mod admin_user;
pub mod roles;
pub mod sample_data;

use thiserror::Error;

use fastfood_core::PriceError;

use crate::config::AdminAccount;
use crate::db::{CatalogStore, RepositoryError, RoleStore, UserStore};
use crate::services::password::PasswordError;

pub use admin_user::{find_admin, seed_admin_user};
pub use roles::seed_roles;
pub use sample_data::{seed_categories, seed_combos, seed_food_items, seed_sample_data};

/// Errors that abort a seeding step.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The store rejected a read or write.
    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),

    /// A food item references a category that has not been seeded.
    #[error("category not found: {0} (seed categories before food items)")]
    MissingCategory(String),

    /// A combo references a food item that has not been seeded.
    #[error("food item not found: {0} (seed food items before combos)")]
    MissingFoodItem(String),

    /// The administrator password was rejected or could not be hashed.
    #[error("admin password: {0}")]
    Password(#[from] PasswordError),

    /// A sample price is invalid.
    #[error("invalid sample price: {0}")]
    Price(#[from] PriceError),

    /// The blocking hashing task panicked or was cancelled.
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Run every seeder in order: roles, administrator, sample data.
///
/// # Errors
///
/// Returns the first [`SeedError`]; later steps do not run.
pub async fn run_seeders<R, U, C>(
    roles: &R,
    users: &U,
    catalog: &C,
    admin: &AdminAccount,
) -> Result<(), SeedError>
where
    R: RoleStore,
    U: UserStore,
    C: CatalogStore,
{
    tracing::info!("Seeding roles");
    seed_roles(roles).await?;

    tracing::info!("Seeding administrator account");
    seed_admin_user(users, admin).await?;

    tracing::info!("Seeding sample catalog");
    seed_sample_data(catalog).await?;

    Ok(())
}
