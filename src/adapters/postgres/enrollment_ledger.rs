//! PostgreSQL implementation of EnrollmentLedger.
//!
//! The ledger is a jsonb array embedded in the users table
//! (`users.enrolled_packages`), matching the document shape the user
//! collaborator owns. The crediting step relies on a single conditional
//! UPDATE so the membership check and the append happen under one row lock.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::enrollment::EnrollmentEntry;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::ports::{EnrollmentLedger, EnrollmentOutcome};

/// PostgreSQL implementation of the EnrollmentLedger port.
pub struct PostgresEnrollmentLedger {
    pool: PgPool,
}

impl PostgresEnrollmentLedger {
    /// Creates a new PostgresEnrollmentLedger with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Whether the user row exists at all, to tell "no such user" apart
    /// from "no such entry" after a zero-row UPDATE.
    async fn user_exists(&self, user_id: &UserId) -> Result<bool, DomainError> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(user_id.as_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to check user existence: {}", e),
                )
            })
    }
}

#[async_trait]
impl EnrollmentLedger for PostgresEnrollmentLedger {
    async fn entries(&self, user_id: &UserId) -> Result<Vec<EnrollmentEntry>, DomainError> {
        let ledger: Option<serde_json::Value> =
            sqlx::query_scalar("SELECT enrolled_packages FROM users WHERE id = $1")
                .bind(user_id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::new(
                        ErrorCode::DatabaseError,
                        format!("Failed to load enrollment ledger: {}", e),
                    )
                })?;

        let ledger = ledger
            .ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))?;

        serde_json::from_value(ledger).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Corrupt enrollment ledger: {}", e),
            )
        })
    }

    async fn is_enrolled(&self, user_id: &UserId, package_id: u32) -> Result<bool, DomainError> {
        let enrolled: Option<bool> = sqlx::query_scalar(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM jsonb_array_elements(enrolled_packages) AS entry
                WHERE (entry->>'package_id')::bigint = $2
            )
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(i64::from(package_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check enrollment: {}", e),
            )
        })?;

        enrolled.ok_or_else(|| DomainError::new(ErrorCode::UserNotFound, "User not found"))
    }

    async fn enroll_if_absent(
        &self,
        user_id: &UserId,
        entry: EnrollmentEntry,
    ) -> Result<EnrollmentOutcome, DomainError> {
        let package_id = entry.package_id;
        let entry_json = serde_json::to_value(&entry).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to encode enrollment entry: {}", e),
            )
        })?;

        // Membership check and append in one statement; the row lock taken
        // by UPDATE makes two racing credits produce exactly one entry.
        let result = sqlx::query(
            r#"
            UPDATE users
            SET enrolled_packages = enrolled_packages || jsonb_build_array($2::jsonb),
                updated_at = NOW()
            WHERE id = $1
              AND NOT EXISTS (
                  SELECT 1 FROM jsonb_array_elements(enrolled_packages) AS entry
                  WHERE (entry->>'package_id')::bigint = $3
              )
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(&entry_json)
        .bind(i64::from(package_id))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to credit enrollment: {}", e),
            )
        })?;

        if result.rows_affected() > 0 {
            return Ok(EnrollmentOutcome::Credited);
        }

        if self.is_enrolled(user_id, package_id).await? {
            Ok(EnrollmentOutcome::AlreadyEnrolled)
        } else {
            Err(DomainError::new(ErrorCode::UserNotFound, "User not found"))
        }
    }

    async fn revoke(&self, user_id: &UserId, package_id: u32) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET enrolled_packages = (
                    SELECT COALESCE(jsonb_agg(kept), '[]'::jsonb)
                    FROM jsonb_array_elements(enrolled_packages) AS kept
                    WHERE (kept->>'package_id')::bigint <> $2
                ),
                updated_at = NOW()
            WHERE id = $1
              AND EXISTS (
                  SELECT 1 FROM jsonb_array_elements(enrolled_packages) AS entry
                  WHERE (entry->>'package_id')::bigint = $2
              )
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(i64::from(package_id))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to revoke enrollment: {}", e),
            )
        })?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        if self.user_exists(user_id).await? {
            Ok(false)
        } else {
            Err(DomainError::new(ErrorCode::UserNotFound, "User not found"))
        }
    }
}
