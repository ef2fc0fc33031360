//! ListMyPaymentsHandler - Query handler for a user's payment history.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::payment::{PaymentFlowError, PaymentRecord};
use crate::ports::PaymentRecordRepository;

/// Newest records returned per request.
const MY_PAYMENTS_LIMIT: u32 = 20;

/// Query for the caller's payment records.
#[derive(Debug, Clone)]
pub struct ListMyPaymentsQuery {
    pub user_id: UserId,
}

/// Result of a payment history query.
#[derive(Debug, Clone)]
pub struct ListMyPaymentsResult {
    /// Records newest first, capped at 20.
    pub payments: Vec<PaymentRecord>,
}

/// Handler for listing a user's payment records.
pub struct ListMyPaymentsHandler {
    repository: Arc<dyn PaymentRecordRepository>,
}

impl ListMyPaymentsHandler {
    pub fn new(repository: Arc<dyn PaymentRecordRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: ListMyPaymentsQuery,
    ) -> Result<ListMyPaymentsResult, PaymentFlowError> {
        let payments = self
            .repository
            .list_for_user(&query.user_id, MY_PAYMENTS_LIMIT)
            .await?;
        Ok(ListMyPaymentsResult { payments })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryPayments;
    use crate::domain::payment::PaymentRecord;

    #[tokio::test]
    async fn returns_only_callers_records() {
        let user_id = UserId::new();
        let other = UserId::new();
        let repo = Arc::new(InMemoryPayments::new());
        repo.create(&PaymentRecord::new_mock_order(
            user_id, 1, "STARTER", 50_000, "INR",
        ))
        .await
        .unwrap();
        repo.create(&PaymentRecord::new_mock_order(
            other, 2, "BASIC", 149_900, "INR",
        ))
        .await
        .unwrap();

        let handler = ListMyPaymentsHandler::new(repo);
        let result = handler.handle(ListMyPaymentsQuery { user_id }).await.unwrap();

        assert_eq!(result.payments.len(), 1);
        assert_eq!(result.payments[0].user_id, user_id);
    }

    #[tokio::test]
    async fn caps_history_at_twenty_records() {
        let user_id = UserId::new();
        let repo = Arc::new(InMemoryPayments::new());
        for _ in 0..25 {
            repo.create(&PaymentRecord::new_mock_order(
                user_id, 1, "STARTER", 50_000, "INR",
            ))
            .await
            .unwrap();
        }

        let handler = ListMyPaymentsHandler::new(repo);
        let result = handler.handle(ListMyPaymentsQuery { user_id }).await.unwrap();

        assert_eq!(result.payments.len(), 20);
    }
}
