//! Seeding configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required (unless seeding with `--dry-run`)
//! - `FASTFOOD_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional (administrator account)
//! - `SEED_ADMIN_EMAIL` - Email and user name (default: admin@fastfood.com)
//! - `SEED_ADMIN_PASSWORD` - Initial password (default: built-in development password)
//! - `SEED_ADMIN_FULL_NAME` - Display name (default: Super Admin)
//! - `SEED_ADMIN_PHONE` - Phone number (default: 0123456789)
//! - `SEED_ADMIN_ADDRESS` - Address (default: Headquarters)
//! - `SEED_ADMIN_DATE_OF_BIRTH` - `YYYY-MM-DD` (default: 1990-01-01)

use chrono::NaiveDate;
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use fastfood_core::Email;

const DEFAULT_ADMIN_EMAIL: &str = "admin@fastfood.com";
const DEFAULT_ADMIN_PASSWORD: &str = "Admin@123";
const DEFAULT_ADMIN_FULL_NAME: &str = "Super Admin";
const DEFAULT_ADMIN_PHONE: &str = "0123456789";
const DEFAULT_ADMIN_ADDRESS: &str = "Headquarters";
const DEFAULT_ADMIN_DATE_OF_BIRTH: &str = "1990-01-01";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Seeding configuration.
#[derive(Clone)]
pub struct SeedConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// The administrator account to ensure
    pub admin: AdminAccount,
}

impl std::fmt::Debug for SeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeedConfig")
            .field("database_url", &"[REDACTED]")
            .field("admin", &self.admin)
            .finish()
    }
}

/// Profile and initial credential of the seeded administrator.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminAccount {
    /// Email address, also used as the user name
    pub email: Email,
    /// Initial password
    pub password: SecretString,
    pub full_name: String,
    pub phone_number: String,
    pub address: String,
    pub date_of_birth: NaiveDate,
}

impl std::fmt::Debug for AdminAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAccount")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("full_name", &self.full_name)
            .field("phone_number", &self.phone_number)
            .field("address", &self.address)
            .field("date_of_birth", &self.date_of_birth)
            .finish()
    }
}

impl Default for AdminAccount {
    /// The development administrator.
    fn default() -> Self {
        Self {
            email: Email::parse(DEFAULT_ADMIN_EMAIL)
                .unwrap_or_else(|_| unreachable!("default admin email is valid")),
            password: SecretString::from(DEFAULT_ADMIN_PASSWORD),
            full_name: DEFAULT_ADMIN_FULL_NAME.to_owned(),
            phone_number: DEFAULT_ADMIN_PHONE.to_owned(),
            address: DEFAULT_ADMIN_ADDRESS.to_owned(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1)
                .unwrap_or_else(|| unreachable!("default date of birth is valid")),
        }
    }
}

impl AdminAccount {
    /// Load the administrator account from environment, falling back to the
    /// development defaults field by field.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `SEED_ADMIN_EMAIL` or
    /// `SEED_ADMIN_DATE_OF_BIRTH` cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let email = Email::parse(&get_env_or_default("SEED_ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL))
            .map_err(|e| ConfigError::InvalidEnvVar("SEED_ADMIN_EMAIL".to_string(), e.to_string()))?;

        let password = get_optional_env("SEED_ADMIN_PASSWORD").unwrap_or_else(|| {
            tracing::warn!(
                "SEED_ADMIN_PASSWORD not set, using the built-in development password. \
                 Set it before seeding any shared environment."
            );
            DEFAULT_ADMIN_PASSWORD.to_string()
        });

        let date_of_birth = get_env_or_default("SEED_ADMIN_DATE_OF_BIRTH", DEFAULT_ADMIN_DATE_OF_BIRTH)
            .parse::<NaiveDate>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SEED_ADMIN_DATE_OF_BIRTH".to_string(), e.to_string())
            })?;

        Ok(Self {
            email,
            password: SecretString::from(password),
            full_name: get_env_or_default("SEED_ADMIN_FULL_NAME", DEFAULT_ADMIN_FULL_NAME),
            phone_number: get_env_or_default("SEED_ADMIN_PHONE", DEFAULT_ADMIN_PHONE),
            address: get_env_or_default("SEED_ADMIN_ADDRESS", DEFAULT_ADMIN_ADDRESS),
            date_of_birth,
        })
    }

    /// Whether the built-in development password is in use.
    #[must_use]
    pub fn uses_default_password(&self) -> bool {
        self.password.expose_secret() == DEFAULT_ADMIN_PASSWORD
    }
}

impl SeedConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the database URL is missing or an admin
    /// variable is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: get_database_url("FASTFOOD_DATABASE_URL")?,
            admin: AdminAccount::from_env()?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
///
/// # Errors
///
/// Returns `ConfigError::MissingEnvVar` naming `primary_key` if neither is set.
pub fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}
