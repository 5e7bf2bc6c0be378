//! Role seeder.

use fastfood_core::RoleName;

use super::SeedError;
use crate::db::RoleStore;

/// Ensure every [`RoleName`] exists.
///
/// Each insert is conditional on the normalized name, so running this
/// repeatedly (or concurrently) never creates a duplicate.
///
/// # Errors
///
/// Returns [`SeedError::Repository`] if the store fails.
pub async fn seed_roles<R: RoleStore>(roles: &R) -> Result<(), SeedError> {
    for role in RoleName::ALL {
        match roles.create_role_if_absent(role.as_str()).await? {
            Some(created) => tracing::info!(role = %created.name, id = %created.id, "Seeded role"),
            None => tracing::debug!(role = %role, "Role already exists"),
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;

    #[tokio::test]
    async fn test_seed_roles_creates_all_roles() {
        let store = MemoryStore::new();
        seed_roles(&store).await.unwrap();

        for role in RoleName::ALL {
            let found = store.find_role(role.as_str()).await.unwrap();
            assert_eq!(found.unwrap().name, role.as_str());
        }
    }

    #[tokio::test]
    async fn test_seed_roles_keeps_existing_role() {
        let store = MemoryStore::new();
        let existing = store.create_role_if_absent("Admin").await.unwrap().unwrap();

        seed_roles(&store).await.unwrap();

        assert_eq!(store.role_count().await, 2);
        assert_eq!(store.find_role("Admin").await.unwrap().unwrap().id, existing.id);
    }
}
