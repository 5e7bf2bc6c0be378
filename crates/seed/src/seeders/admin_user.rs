//! Administrator account seeder.
//!
//! The account is located by its email exactly as configured first, then by
//! the normalized email. Only when both miss is a new account created, and
//! creation plus the `Admin` role assignment commit together.

use secrecy::ExposeSecret;

use fastfood_core::{Email, RoleName};

use super::SeedError;
use crate::config::AdminAccount;
use crate::db::{RepositoryError, UserStore};
use crate::models::{NewUser, User};
use crate::services::password::{hash_password, validate_password};

/// Find an account by exact email, falling back to the normalized email.
///
/// # Errors
///
/// Returns `RepositoryError` if either lookup fails.
pub async fn find_admin<U: UserStore>(
    users: &U,
    email: &Email,
) -> Result<Option<User>, RepositoryError> {
    if let Some(user) = users.find_by_email(email).await? {
        return Ok(Some(user));
    }

    users.find_by_normalized_email(&email.normalized()).await
}

/// Ensure the administrator account exists.
///
/// # Errors
///
/// Returns [`SeedError::Password`] if the configured password fails the
/// policy, and [`SeedError::Repository`] if the store fails or the `Admin`
/// role has not been seeded.
pub async fn seed_admin_user<U: UserStore>(
    users: &U,
    account: &AdminAccount,
) -> Result<(), SeedError> {
    if let Some(existing) = find_admin(users, &account.email).await? {
        tracing::debug!(
            user_id = %existing.id,
            email = %existing.email,
            "Administrator account already exists"
        );
        return Ok(());
    }

    validate_password(account.password.expose_secret())?;
    if account.uses_default_password() {
        tracing::warn!(
            email = %account.email,
            "Creating administrator with the built-in development password. Change it immediately."
        );
    }

    let password = account.password.clone();
    let password_hash =
        tokio::task::spawn_blocking(move || hash_password(password.expose_secret())).await??;

    let new_user = NewUser {
        email: account.email.clone(),
        password_hash,
        full_name: account.full_name.clone(),
        phone_number: account.phone_number.clone(),
        address: account.address.clone(),
        date_of_birth: account.date_of_birth,
    };

    match users.create_with_role(&new_user, RoleName::Admin).await {
        Ok(user) => {
            tracing::info!(
                user_id = %user.id,
                email = %user.email,
                "Administrator account created"
            );
            Ok(())
        }
        Err(RepositoryError::Conflict(reason)) => {
            // Lost a race with another seeding run; its account stands.
            tracing::warn!(email = %account.email, %reason, "Administrator account created concurrently");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::db::{MemoryStore, RoleStore};
    use crate::services::password::{PasswordError, verify_password};

    async fn store_with_roles() -> MemoryStore {
        let store = MemoryStore::new();
        store.create_role_if_absent("Admin").await.unwrap();
        store.create_role_if_absent("Customer").await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_creates_admin_with_role_and_profile() {
        let store = store_with_roles().await;
        let account = AdminAccount::default();

        seed_admin_user(&store, &account).await.unwrap();

        let admin = find_admin(&store, &account.email).await.unwrap().unwrap();
        assert_eq!(admin.user_name, "admin@fastfood.com");
        assert_eq!(admin.full_name, "Super Admin");
        assert_eq!(admin.address, "Headquarters");
        assert_eq!(store.roles_for(admin.id).await.unwrap(), ["Admin"]);

        let hash = store.password_hash(admin.id).await.unwrap();
        assert!(verify_password("Admin@123", &hash).is_ok());
    }

    #[tokio::test]
    async fn test_second_run_is_noop() {
        let store = store_with_roles().await;
        let account = AdminAccount::default();

        seed_admin_user(&store, &account).await.unwrap();
        seed_admin_user(&store, &account).await.unwrap();

        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_normalized_lookup_prevents_duplicate() {
        let store = store_with_roles().await;
        let shouting = AdminAccount {
            email: Email::parse("ADMIN@FASTFOOD.COM").unwrap(),
            ..AdminAccount::default()
        };
        seed_admin_user(&store, &shouting).await.unwrap();

        let account = AdminAccount::default();
        assert!(store.find_by_email(&account.email).await.unwrap().is_none());

        seed_admin_user(&store, &account).await.unwrap();
        assert_eq!(store.user_count().await, 1);
    }

    #[tokio::test]
    async fn test_weak_password_is_rejected_before_writing() {
        let store = store_with_roles().await;
        let account = AdminAccount {
            password: SecretString::from("admin"),
            ..AdminAccount::default()
        };

        let err = seed_admin_user(&store, &account).await.unwrap_err();
        assert!(matches!(err, SeedError::Password(PasswordError::Weak(_))));
        assert_eq!(store.user_count().await, 0);
    }

    #[tokio::test]
    async fn test_missing_admin_role_propagates() {
        let store = MemoryStore::new();

        let err = seed_admin_user(&store, &AdminAccount::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SeedError::Repository(RepositoryError::RoleNotFound(_))
        ));
        assert_eq!(store.user_count().await, 0);
    }
}
