//! Integration tests for role seeding.

use fastfood_core::RoleName;
use fastfood_seed::db::{MemoryStore, RoleStore};
use fastfood_seed::seeders::seed_roles;

#[tokio::test]
async fn test_seeds_admin_and_customer() {
    let store = MemoryStore::new();

    seed_roles(&store).await.expect("seeding roles");

    assert_eq!(store.role_count().await, 2);
    for role in RoleName::ALL {
        let found = store
            .find_role(role.as_str())
            .await
            .expect("role lookup")
            .expect("role exists");
        assert_eq!(found.name, role.as_str());
    }
}

#[tokio::test]
async fn test_rerun_adds_nothing() {
    let store = MemoryStore::new();

    seed_roles(&store).await.expect("first run");
    seed_roles(&store).await.expect("second run");

    assert_eq!(store.role_count().await, 2);
}

#[tokio::test]
async fn test_existing_role_is_kept() {
    let store = MemoryStore::new();
    let existing = store
        .create_role_if_absent("Admin")
        .await
        .expect("insert")
        .expect("new role");

    seed_roles(&store).await.expect("seeding roles");

    let admin = store
        .find_role("admin")
        .await
        .expect("role lookup")
        .expect("role exists");
    assert_eq!(admin.id, existing.id);
    assert_eq!(store.role_count().await, 2);
}
