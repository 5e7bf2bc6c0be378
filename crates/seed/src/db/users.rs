//! User repository for database operations.
//!
//! Accounts are keyed twice: by the email exactly as entered, and by its
//! normalized form. Only the normalized columns carry unique constraints.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use fastfood_core::{Email, RoleName, UserId, normalize};

use super::{RepositoryError, UserStore};
use crate::models::{NewUser, User};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `PostgreSQL` user queries.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i32,
    public_id: Uuid,
    user_name: String,
    email: String,
    full_name: String,
    phone_number: String,
    address: String,
    date_of_birth: NaiveDate,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: UserId::new(row.id),
            public_id: row.public_id,
            user_name: row.user_name,
            email,
            full_name: row.full_name,
            phone_number: row.phone_number,
            address: row.address,
            date_of_birth: row.date_of_birth,
            created_at: row.created_at,
        })
    }
}

const USER_COLUMNS: &str = "id, public_id, user_name, email, full_name, phone_number, \
                            address, date_of_birth, created_at";

// =============================================================================
// Repository
// =============================================================================

/// Repository for user account database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Count every account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    async fn find_where(&self, column: &str, value: &str) -> Result<Option<User>, RepositoryError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE {column} = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(self.pool)
            .await?;

        row.map(TryInto::try_into).transpose()
    }
}

impl UserStore for UserRepository<'_> {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        self.find_where("email", email.as_str()).await
    }

    async fn find_by_normalized_email(
        &self,
        normalized_email: &str,
    ) -> Result<Option<User>, RepositoryError> {
        self.find_where("normalized_email", normalized_email).await
    }

    async fn create_with_role(
        &self,
        user: &NewUser,
        role: RoleName,
    ) -> Result<User, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let role_id = sqlx::query_scalar::<_, i32>(
            r"
            SELECT id FROM roles WHERE normalized_name = $1
            ",
        )
        .bind(normalize(role.as_str()))
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| RepositoryError::RoleNotFound(role.to_string()))?;

        let sql = format!(
            r"
            INSERT INTO users (
                public_id, user_name, normalized_user_name, email, normalized_email,
                password_hash, full_name, phone_number, address, date_of_birth
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {USER_COLUMNS}
            "
        );
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(Uuid::new_v4())
            .bind(user.user_name())
            .bind(normalize(user.user_name()))
            .bind(user.email.as_str())
            .bind(user.email.normalized())
            .bind(&user.password_hash)
            .bind(&user.full_name)
            .bind(&user.phone_number)
            .bind(&user.address)
            .bind(user.date_of_birth)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| RepositoryError::from_insert(e, "email"))?;

        sqlx::query(
            r"
            INSERT INTO user_roles (user_id, role_id)
            VALUES ($1, $2)
            ",
        )
        .bind(row.id)
        .bind(role_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        row.try_into()
    }

    async fn roles_for(&self, user_id: UserId) -> Result<Vec<String>, RepositoryError> {
        let names = sqlx::query_scalar::<_, String>(
            r"
            SELECT r.name
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = $1
            ORDER BY r.name
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(names)
    }
}
