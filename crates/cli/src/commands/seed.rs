//! Seed the database with roles, the administrator account and sample data.
//!
//! Every seeder is idempotent, so rerunning a target is always safe. With
//! `--dry-run` the seeders run against an empty in-memory store, which
//! exercises configuration and ordering without a database.

use clap::ValueEnum;
use tracing::info;

use fastfood_seed::config::{AdminAccount, SeedConfig};
use fastfood_seed::db::{
    self, CatalogRepository, CatalogStore, MemoryStore, RoleRepository, RoleStore,
    UserRepository, UserStore,
};
use fastfood_seed::seeders::{
    SeedError, run_seeders, seed_admin_user, seed_roles, seed_sample_data,
};

use super::CommandError;

/// Which seeder to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedTarget {
    /// Identity roles
    Roles,
    /// Administrator account
    Admin,
    /// Sample categories, food items and combo
    Sample,
    /// All of the above, in order
    All,
}

/// Seed the configured database.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the connection fails, or a
/// seeder fails.
pub async fn run(target: SeedTarget) -> Result<(), CommandError> {
    let config = SeedConfig::from_env()?;

    info!("Connecting to database...");
    let pool = db::create_pool(&config.database_url).await?;

    let catalog = CatalogRepository::new(&pool);
    seed(
        target,
        &RoleRepository::new(&pool),
        &UserRepository::new(&pool),
        &catalog,
        &config.admin,
    )
    .await?;

    log_counts(&catalog).await
}

/// Run the seeders against a fresh in-memory store.
///
/// # Errors
///
/// Returns an error if the administrator configuration is invalid or a
/// seeder fails.
pub async fn dry_run(target: SeedTarget) -> Result<(), CommandError> {
    dotenvy::dotenv().ok();
    let admin = AdminAccount::from_env()?;

    info!("Dry run: seeding an in-memory store");
    let store = seed_in_memory(target, &admin).await?;

    info!(
        roles = store.role_count().await,
        users = store.user_count().await,
        "Dry run finished"
    );
    log_counts(&store).await
}

/// Seed an empty [`MemoryStore`].
///
/// The store stands in for a migrated database that already holds its
/// roles, so the `admin` target gets them first.
async fn seed_in_memory(
    target: SeedTarget,
    admin: &AdminAccount,
) -> Result<MemoryStore, SeedError> {
    let store = MemoryStore::new();
    if target == SeedTarget::Admin {
        seed_roles(&store).await?;
    }
    seed(target, &store, &store, &store, admin).await?;
    Ok(store)
}

async fn seed<R, U, C>(
    target: SeedTarget,
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
    info!(?target, "Seeding");
    match target {
        SeedTarget::Roles => seed_roles(roles).await,
        SeedTarget::Admin => seed_admin_user(users, admin).await,
        SeedTarget::Sample => seed_sample_data(catalog).await,
        SeedTarget::All => run_seeders(roles, users, catalog, admin).await,
    }
}

async fn log_counts<C: CatalogStore>(catalog: &C) -> Result<(), CommandError> {
    let counts = catalog.counts().await?;

    info!("Seeding complete!");
    info!("  Categories: {}", counts.categories);
    info!("  Food items: {}", counts.food_items);
    info!("  Combos: {}", counts.combos);
    info!("  Combo items: {}", counts.combo_items);
    Ok(())
}
