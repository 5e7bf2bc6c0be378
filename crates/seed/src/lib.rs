//! FastFood Online seeding library.
//!
//! Populates a fresh database with what the web application expects on
//! first start: the identity roles, an administrator account, and a small
//! sample catalog. Every step is safe to rerun.
//!
//! # Example
//!
//! ```rust,no_run
//! use fastfood_seed::config::SeedConfig;
//! use fastfood_seed::db::{self, CatalogRepository, RoleRepository, UserRepository};
//! use fastfood_seed::seeders::run_seeders;
//!
//! # async fn startup() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SeedConfig::from_env()?;
//! let pool = db::create_pool(&config.database_url).await?;
//! db::run_migrations(&pool).await?;
//!
//! run_seeders(
//!     &RoleRepository::new(&pool),
//!     &UserRepository::new(&pool),
//!     &CatalogRepository::new(&pool),
//!     &config.admin,
//! )
//! .await?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod models;
pub mod seeders;
pub mod services;
