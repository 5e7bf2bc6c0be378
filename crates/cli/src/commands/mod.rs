//! Subcommand implementations.

pub mod migrate;
pub mod seed;
pub mod status;

use fastfood_seed::config::ConfigError;
use fastfood_seed::db::RepositoryError;
use fastfood_seed::seeders::SeedError;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// A migration failed.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A seeder failed.
    #[error("Seeding failed: {0}")]
    Seed(#[from] SeedError),

    /// A read for reporting failed.
    #[error("Query failed: {0}")]
    Repository(#[from] RepositoryError),

    /// The status report could not be serialized.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
