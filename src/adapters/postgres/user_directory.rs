//! PostgreSQL implementation of UserDirectory.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::enrollment::UserContact;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::UserDirectory;

/// PostgreSQL implementation of the UserDirectory port.
///
/// Read-only view over the users table; account management itself lives
/// with the auth collaborator.
pub struct PostgresUserDirectory {
    pool: PgPool,
}

impl PostgresUserDirectory {
    /// Creates a new PostgresUserDirectory with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a user's contact details.
#[derive(Debug, sqlx::FromRow)]
struct ContactRow {
    name: String,
    email: String,
    phone: String,
}

impl From<ContactRow> for UserContact {
    fn from(row: ContactRow) -> Self {
        Self {
            name: row.name,
            email: row.email,
            phone: row.phone,
        }
    }
}

#[async_trait]
impl UserDirectory for PostgresUserDirectory {
    async fn contact(&self, user_id: &UserId) -> Result<Option<UserContact>, DomainError> {
        let row: Option<ContactRow> = sqlx::query_as(
            r#"
            SELECT name, email, COALESCE(phone, '') AS phone
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to load user contact: {}", e),
            )
        })?;

        Ok(row.map(UserContact::from))
    }
}
