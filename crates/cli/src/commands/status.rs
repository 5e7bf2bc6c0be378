//! Report what the seeders have put in the database.

use serde::Serialize;
use tracing::info;

use fastfood_seed::config::get_database_url;
use fastfood_seed::db::{self, CatalogRepository, CatalogStore, RoleRepository, UserRepository};
use fastfood_seed::models::CatalogCounts;

use super::CommandError;

#[derive(Debug, Serialize)]
struct StatusReport {
    roles: Vec<String>,
    users: i64,
    catalog: CatalogCounts,
}

/// Print role, user and catalog counts.
///
/// # Errors
///
/// Returns an error if the database URL is missing or a query fails.
pub async fn run(json: bool) -> Result<(), CommandError> {
    dotenvy::dotenv().ok();

    let database_url = get_database_url("FASTFOOD_DATABASE_URL")?;
    let pool = db::create_pool(&database_url).await?;

    let report = StatusReport {
        roles: RoleRepository::new(&pool)
            .list_all()
            .await?
            .into_iter()
            .map(|r| r.name)
            .collect(),
        users: UserRepository::new(&pool).count().await?,
        catalog: CatalogRepository::new(&pool).counts().await?,
    };

    if json {
        #[allow(clippy::print_stdout)]
        {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        return Ok(());
    }

    info!("Database status");
    info!("===============");
    info!("Roles: {}", report.roles.join(", "));
    info!("Users: {}", report.users);
    info!("Categories: {}", report.catalog.categories);
    info!("Food items: {}", report.catalog.food_items);
    info!("Combos: {}", report.catalog.combos);
    info!("Combo items: {}", report.catalog.combo_items);
    Ok(())
}
