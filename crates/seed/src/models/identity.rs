//! Identity domain types: roles and user accounts.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use fastfood_core::{Email, RoleId, UserId};

/// A name-identified authorization group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    /// Database ID.
    pub id: RoleId,
    /// Role name as displayed (e.g. `Admin`).
    pub name: String,
}

/// A user account (domain type).
///
/// The password hash is deliberately absent; it never leaves the store.
#[derive(Debug, Clone)]
pub struct User {
    /// Database ID.
    pub id: UserId,
    /// Stable external identifier.
    pub public_id: Uuid,
    /// Login name. Seeded accounts use their email.
    pub user_name: String,
    /// Email address as entered.
    pub email: Email,
    /// Display name.
    pub full_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Postal address.
    pub address: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// An account to be created.
#[derive(Clone)]
pub struct NewUser {
    /// Email address; also used as the user name.
    pub email: Email,
    /// Argon2 PHC string for the initial credential.
    pub password_hash: String,
    /// Display name.
    pub full_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Postal address.
    pub address: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("full_name", &self.full_name)
            .field("phone_number", &self.phone_number)
            .field("address", &self.address)
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}

impl NewUser {
    /// The login name stored for this account.
    #[must_use]
    pub fn user_name(&self) -> &str {
        self.email.as_str()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_debug_redacts_hash() {
        let user = NewUser {
            email: Email::parse("admin@fastfood.com").unwrap(),
            password_hash: "$argon2id$v=19$secret-material".to_owned(),
            full_name: "Super Admin".to_owned(),
            phone_number: "0123456789".to_owned(),
            address: "Headquarters".to_owned(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        };

        let debug_output = format!("{user:?}");
        assert!(debug_output.contains("admin@fastfood.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("secret-material"));
        assert_eq!(user.user_name(), "admin@fastfood.com");
    }
}
