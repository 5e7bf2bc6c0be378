//! Role repository for database operations.

use sqlx::PgPool;

use fastfood_core::{RoleId, normalize};

use super::{RepositoryError, RoleStore};
use crate::models::Role;

/// Internal row type for `PostgreSQL` role queries.
#[derive(Debug, sqlx::FromRow)]
struct RoleRow {
    id: i32,
    name: String,
}

impl From<RoleRow> for Role {
    fn from(row: RoleRow) -> Self {
        Self {
            id: RoleId::new(row.id),
            name: row.name,
        }
    }
}

/// Repository for role database operations.
pub struct RoleRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RoleRepository<'a> {
    /// Create a new role repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every role, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Role>, RepositoryError> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r"
            SELECT id, name
            FROM roles
            ORDER BY name
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

impl RoleStore for RoleRepository<'_> {
    async fn find_role(&self, name: &str) -> Result<Option<Role>, RepositoryError> {
        let row = sqlx::query_as::<_, RoleRow>(
            r"
            SELECT id, name
            FROM roles
            WHERE normalized_name = $1
            ",
        )
        .bind(normalize(name))
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn create_role_if_absent(&self, name: &str) -> Result<Option<Role>, RepositoryError> {
        let row = sqlx::query_as::<_, RoleRow>(
            r"
            INSERT INTO roles (name, normalized_name)
            VALUES ($1, $2)
            ON CONFLICT (normalized_name) DO NOTHING
            RETURNING id, name
            ",
        )
        .bind(name)
        .bind(normalize(name))
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }
}
