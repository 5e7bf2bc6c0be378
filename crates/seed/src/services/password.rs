//! Password policy and hashing for seeded accounts.
//!
//! Hashes are Argon2id PHC strings, so the web application's login path can
//! verify them without knowing the parameters used here.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use thiserror::Error;

/// Minimum password length accepted for an account.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Errors from password validation and hashing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PasswordError {
    /// The password violates the policy.
    #[error("password is too weak: {0}")]
    Weak(String),

    /// Argon2 failed to hash or parse a hash.
    #[error("password hashing failed: {0}")]
    Hash(String),

    /// The password does not match the hash.
    #[error("password does not match")]
    Mismatch,
}

/// Check a password against the account password policy.
///
/// Requires at least [`MIN_PASSWORD_LENGTH`] characters including a
/// lowercase letter, an uppercase letter, a digit and a character that is
/// neither.
///
/// # Errors
///
/// Returns [`PasswordError::Weak`] naming every unmet requirement.
pub fn validate_password(password: &str) -> Result<(), PasswordError> {
    let mut missing = Vec::new();

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        missing.push(format!("at least {MIN_PASSWORD_LENGTH} characters"));
    }
    if !password.chars().any(char::is_lowercase) {
        missing.push("a lowercase letter".to_owned());
    }
    if !password.chars().any(char::is_uppercase) {
        missing.push("an uppercase letter".to_owned());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        missing.push("a digit".to_owned());
    }
    if password.chars().all(char::is_alphanumeric) {
        missing.push("a non-alphanumeric character".to_owned());
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PasswordError::Weak(format!("needs {}", missing.join(", "))))
    }
}

/// Hash a password using Argon2id with a random salt.
///
/// # Errors
///
/// Returns [`PasswordError::Hash`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| PasswordError::Hash(e.to_string()))?;

    Ok(password_hash.to_string())
}

/// Verify a password against a stored Argon2 hash.
///
/// # Errors
///
/// Returns [`PasswordError::Hash`] if the stored hash cannot be parsed and
/// [`PasswordError::Mismatch`] if the password is wrong.
pub fn verify_password(password: &str, password_hash: &str) -> Result<(), PasswordError> {
    let parsed_hash =
        PasswordHash::new(password_hash).map_err(|e| PasswordError::Hash(e.to_string()))?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|err| {
            tracing::trace!("Password verification failed: {err}");
            PasswordError::Mismatch
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_admin_password_meets_policy() {
        assert!(validate_password("Admin@123").is_ok());
    }

    #[test]
    fn test_policy_lists_every_gap() {
        let Err(PasswordError::Weak(msg)) = validate_password("abc") else {
            panic!("expected weak password");
        };
        assert!(msg.contains("at least 6 characters"));
        assert!(msg.contains("an uppercase letter"));
        assert!(msg.contains("a digit"));
        assert!(msg.contains("a non-alphanumeric character"));
        assert!(!msg.contains("a lowercase letter"));
    }

    #[test]
    fn test_hash_and_verify_password() {
        let hash = hash_password("Admin@123").unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("Admin@123", &hash).is_ok());
        assert_eq!(
            verify_password("admin@123", &hash),
            Err(PasswordError::Mismatch)
        );
    }

    #[test]
    fn test_hash_generates_different_salts() {
        let hash1 = hash_password("Admin@123").unwrap();
        let hash2 = hash_password("Admin@123").unwrap();
        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_invalid_hash_format() {
        assert!(matches!(
            verify_password("Admin@123", "not_a_valid_hash"),
            Err(PasswordError::Hash(_))
        ));
    }
}
