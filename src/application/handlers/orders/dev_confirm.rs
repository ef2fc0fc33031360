//! DevConfirmHandler - Command handler for settling mock checkout records.
//!
//! Only routed outside production, and only for records created on the mock
//! checkout path.

use std::sync::Arc;

use crate::domain::foundation::{PaymentId, UserId};
use crate::domain::payment::PaymentFlowError;
use crate::ports::{EnrollmentOutcome, PaymentRecordRepository};

use super::credit::EnrollmentCreditor;

/// Command to confirm a mock order as paid.
#[derive(Debug, Clone)]
pub struct DevConfirmCommand {
    /// Record created during mock order initiation.
    pub payment_record_id: PaymentId,
    /// Caller; must own the record.
    pub user_id: UserId,
}

/// Result of a mock confirmation.
#[derive(Debug, Clone)]
pub struct DevConfirmResult {
    pub payment_record_id: PaymentId,
    pub outcome: EnrollmentOutcome,
}

/// Handler for confirming mock checkout records.
pub struct DevConfirmHandler {
    repository: Arc<dyn PaymentRecordRepository>,
    creditor: Arc<EnrollmentCreditor>,
}

impl DevConfirmHandler {
    pub fn new(
        repository: Arc<dyn PaymentRecordRepository>,
        creditor: Arc<EnrollmentCreditor>,
    ) -> Self {
        Self {
            repository,
            creditor,
        }
    }

    pub async fn handle(
        &self,
        cmd: DevConfirmCommand,
    ) -> Result<DevConfirmResult, PaymentFlowError> {
        let mut record = self
            .repository
            .find_by_id(&cmd.payment_record_id)
            .await?
            // A record belonging to someone else reads as not-found so the
            // endpoint does not confirm which ids exist.
            .filter(|r| r.user_id == cmd.user_id)
            .ok_or(PaymentFlowError::PaymentNotFound(cmd.payment_record_id))?;

        if !record.is_dev {
            return Err(PaymentFlowError::validation(
                "paymentId",
                "not a mock checkout record",
            ));
        }

        let outcome = self.creditor.credit(&mut record).await?;

        tracing::info!(
            payment_record_id = %record.id,
            user_id = %record.user_id,
            package_id = record.package_id,
            "mock order confirmed"
        );

        Ok(DevConfirmResult {
            payment_record_id: record.id,
            outcome,
        })
    }
}
