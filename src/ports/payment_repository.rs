//! Payment record persistence port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, PaymentId, UserId};
use crate::domain::payment::PaymentRecord;

/// Persistent store for payment records.
///
/// Owned exclusively by the order initiation and verification services;
/// reporting collaborators get read-only access through `list_for_user`.
#[async_trait]
pub trait PaymentRecordRepository: Send + Sync {
    /// Persists a newly created record.
    async fn create(&self, record: &PaymentRecord) -> Result<(), DomainError>;

    /// Finds a record by id.
    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, DomainError>;

    /// Persists status and gateway-field changes of an existing record.
    async fn update(&self, record: &PaymentRecord) -> Result<(), DomainError>;

    /// The user's records, newest first, capped at `limit`.
    async fn list_for_user(
        &self,
        user_id: &UserId,
        limit: u32,
    ) -> Result<Vec<PaymentRecord>, DomainError>;
}
