//! MarkPaidHandler - Admin override forcing a payment record to paid.

use std::sync::Arc;

use crate::application::handlers::orders::EnrollmentCreditor;
use crate::domain::foundation::PaymentId;
use crate::domain::payment::PaymentFlowError;
use crate::ports::{EnrollmentOutcome, PaymentRecordRepository};

/// Command to force a record to paid.
#[derive(Debug, Clone)]
pub struct MarkPaidCommand {
    pub payment_record_id: PaymentId,
}

/// Result of the override.
#[derive(Debug, Clone)]
pub struct MarkPaidResult {
    pub payment_record_id: PaymentId,
    pub outcome: EnrollmentOutcome,
}

/// Handler for the admin mark-paid override.
///
/// Runs the same crediting step as callback verification, so forcing an
/// already-enrolled user's record to paid appends no duplicate ledger entry.
pub struct MarkPaidHandler {
    repository: Arc<dyn PaymentRecordRepository>,
    creditor: Arc<EnrollmentCreditor>,
}

impl MarkPaidHandler {
    pub fn new(
        repository: Arc<dyn PaymentRecordRepository>,
        creditor: Arc<EnrollmentCreditor>,
    ) -> Self {
        Self {
            repository,
            creditor,
        }
    }

    pub async fn handle(&self, cmd: MarkPaidCommand) -> Result<MarkPaidResult, PaymentFlowError> {
        let mut record = self
            .repository
            .find_by_id(&cmd.payment_record_id)
            .await?
            .ok_or(PaymentFlowError::PaymentNotFound(cmd.payment_record_id))?;

        let outcome = self.creditor.credit(&mut record).await?;

        tracing::info!(
            payment_record_id = %record.id,
            user_id = %record.user_id,
            package_id = record.package_id,
            "payment force-marked paid"
        );

        Ok(MarkPaidResult {
            payment_record_id: record.id,
            outcome,
        })
    }
}
