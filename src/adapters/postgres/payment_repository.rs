//! PostgreSQL implementation of PaymentRecordRepository.
//!
//! Provides persistent storage for PaymentRecord aggregates using PostgreSQL.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, PaymentId, Timestamp, UserId};
use crate::domain::payment::{PaymentRecord, PaymentStatus};
use crate::ports::PaymentRecordRepository;

/// PostgreSQL implementation of the PaymentRecordRepository port.
///
/// Uses sqlx for type-safe database operations with connection pooling.
pub struct PostgresPaymentRecordRepository {
    pool: PgPool,
}

impl PostgresPaymentRecordRepository {
    /// Creates a new PostgresPaymentRecordRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a payment record.
#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: Uuid,
    user_id: Uuid,
    package_id: i64,
    package_name: String,
    amount: i64,
    currency: String,
    status: String,
    gateway_order_id: Option<String>,
    gateway_payment_id: Option<String>,
    gateway_signature: Option<String>,
    is_dev: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for PaymentRecord {
    type Error = DomainError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        let status = parse_status(&row.status)?;
        let package_id = u32::try_from(row.package_id).map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid package_id value: {}", row.package_id),
            )
        })?;

        Ok(PaymentRecord {
            id: PaymentId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            package_id,
            package_name: row.package_name,
            amount: row.amount,
            currency: row.currency,
            status,
            gateway_order_id: row.gateway_order_id,
            gateway_payment_id: row.gateway_payment_id,
            gateway_signature: row.gateway_signature,
            is_dev: row.is_dev,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn parse_status(s: &str) -> Result<PaymentStatus, DomainError> {
    PaymentStatus::from_str(&s.to_lowercase())
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, e))
}

#[async_trait]
impl PaymentRecordRepository for PostgresPaymentRecordRepository {
    async fn create(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO payments (
                id, user_id, package_id, package_name, amount, currency, status,
                gateway_order_id, gateway_payment_id, gateway_signature, is_dev,
                created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.user_id.as_uuid())
        .bind(i64::from(record.package_id))
        .bind(&record.package_name)
        .bind(record.amount)
        .bind(&record.currency)
        .bind(record.status.as_str())
        .bind(&record.gateway_order_id)
        .bind(&record.gateway_payment_id)
        .bind(&record.gateway_signature)
        .bind(record.is_dev)
        .bind(record.created_at.as_datetime())
        .bind(record.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("payments_user_id_fkey") {
                    return DomainError::new(ErrorCode::UserNotFound, "User not found");
                }
            }
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to save payment record: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, DomainError> {
        let row: Option<PaymentRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, package_id, package_name, amount, currency, status,
                   gateway_order_id, gateway_payment_id, gateway_signature, is_dev,
                   created_at, updated_at
            FROM payments
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find payment record: {}", e),
            )
        })?;

        row.map(PaymentRecord::try_from).transpose()
    }

    async fn update(&self, record: &PaymentRecord) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE payments SET
                status = $2,
                gateway_order_id = $3,
                gateway_payment_id = $4,
                gateway_signature = $5,
                updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(record.id.as_uuid())
        .bind(record.status.as_str())
        .bind(&record.gateway_order_id)
        .bind(&record.gateway_payment_id)
        .bind(&record.gateway_signature)
        .bind(record.updated_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update payment record: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::PaymentNotFound,
                "Payment record not found",
            ));
        }

        Ok(())
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<PaymentRecord>, DomainError> {
        let rows: Vec<PaymentRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, package_id, package_name, amount, currency, status,
                   gateway_order_id, gateway_payment_id, gateway_signature, is_dev,
                   created_at, updated_at
            FROM payments
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list payment records: {}", e),
            )
        })?;

        rows.into_iter().map(PaymentRecord::try_from).collect()
    }
}
