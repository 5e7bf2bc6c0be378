//! Seeding against `PostgreSQL`.
//!
//! These tests require a reachable, empty database named by
//! `FASTFOOD_TEST_DATABASE_URL`. They are ignored by default:
//!
//! ```bash
//! cargo test -p fastfood-integration-tests -- --include-ignored --test-threads=1
//! ```

use fastfood_seed::config::AdminAccount;
use fastfood_seed::db::{
    self, CatalogRepository, CatalogStore, RoleRepository, UserRepository, UserStore,
};
use fastfood_seed::seeders::{find_admin, run_seeders};
use rust_decimal::Decimal;
use secrecy::SecretString;
use sqlx::PgPool;

async fn migrated_pool() -> PgPool {
    let url = std::env::var("FASTFOOD_TEST_DATABASE_URL")
        .expect("FASTFOOD_TEST_DATABASE_URL must be set");
    let pool = db::create_pool(&SecretString::from(url))
        .await
        .expect("Failed to connect to test database");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_seeding_twice_against_postgres() {
    let pool = migrated_pool().await;
    let roles = RoleRepository::new(&pool);
    let users = UserRepository::new(&pool);
    let catalog = CatalogRepository::new(&pool);
    let account = AdminAccount::default();

    run_seeders(&roles, &users, &catalog, &account)
        .await
        .expect("first run");
    run_seeders(&roles, &users, &catalog, &account)
        .await
        .expect("second run");

    let role_names: Vec<_> = roles
        .list_all()
        .await
        .expect("roles")
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(role_names, ["Admin", "Customer"]);
    assert_eq!(users.count().await.expect("user count"), 1);

    let admin = find_admin(&users, &account.email)
        .await
        .expect("lookup")
        .expect("admin exists");
    assert_eq!(users.roles_for(admin.id).await.expect("roles"), ["Admin"]);

    let counts = catalog.counts().await.expect("counts");
    assert_eq!(
        (counts.categories, counts.food_items, counts.combos, counts.combo_items),
        (2, 3, 1, 2)
    );
    assert_eq!(catalog.list_food_items().await.expect("food items").len(), 3);

    let combo = catalog
        .find_combo_by_name("Combo Bánh Flan + Trà Sữa")
        .await
        .expect("lookup")
        .expect("combo exists");
    assert_eq!(combo.price.amount(), Decimal::new(499, 2));
    let members = catalog
        .list_combo_items(combo.id)
        .await
        .expect("combo items");
    assert_eq!(members.len(), 2);
    assert!(members.iter().all(|item| item.quantity == 1));
}
