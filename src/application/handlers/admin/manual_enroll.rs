//! ManualEnrollHandler - Admin override granting an enrollment directly.

use std::sync::Arc;

use crate::domain::catalog::PackageCatalog;
use crate::domain::enrollment::EnrollmentEntry;
use crate::domain::foundation::{PaymentId, UserId};
use crate::domain::payment::{PaymentFlowError, PaymentRecord};
use crate::ports::{
    EnrollmentLedger, EnrollmentNotice, EnrollmentNotifier, EnrollmentOutcome,
    PaymentRecordRepository, UserDirectory,
};

/// Command to enroll a user without a gateway payment.
#[derive(Debug, Clone)]
pub struct ManualEnrollCommand {
    pub user_id: UserId,
    pub package_id: u32,
    /// Overrides the catalog name when set (e.g. grandfathered packages).
    pub package_name: Option<String>,
    /// Overrides the catalog price, in paise.
    pub amount: Option<i64>,
}

/// Result of a manual enrollment.
#[derive(Debug, Clone)]
pub struct ManualEnrollResult {
    /// Synthesized paid record, flagged as manual.
    pub payment_record_id: PaymentId,
}

/// Handler for the admin manual-enroll override.
pub struct ManualEnrollHandler {
    catalog: Arc<PackageCatalog>,
    repository: Arc<dyn PaymentRecordRepository>,
    ledger: Arc<dyn EnrollmentLedger>,
    users: Arc<dyn UserDirectory>,
    notifier: Arc<dyn EnrollmentNotifier>,
    currency: String,
}

impl ManualEnrollHandler {
    pub fn new(
        catalog: Arc<PackageCatalog>,
        repository: Arc<dyn PaymentRecordRepository>,
        ledger: Arc<dyn EnrollmentLedger>,
        users: Arc<dyn UserDirectory>,
        notifier: Arc<dyn EnrollmentNotifier>,
        currency: String,
    ) -> Self {
        Self {
            catalog,
            repository,
            ledger,
            users,
            notifier,
            currency,
        }
    }

    pub async fn handle(
        &self,
        cmd: ManualEnrollCommand,
    ) -> Result<ManualEnrollResult, PaymentFlowError> {
        let contact = self
            .users
            .contact(&cmd.user_id)
            .await?
            .ok_or(PaymentFlowError::UserNotFound(cmd.user_id))?;

        // Name and amount default from the catalog; overrides allow granting
        // packages the catalog no longer lists.
        let (package_name, amount) = match (cmd.package_name, cmd.amount) {
            (Some(name), Some(amount)) => (name, amount),
            (name, amount) => {
                let package = self
                    .catalog
                    .find(cmd.package_id)
                    .ok_or(PaymentFlowError::InvalidPackage(cmd.package_id))?;
                (
                    name.unwrap_or_else(|| package.name.clone()),
                    amount.unwrap_or(package.price),
                )
            }
        };

        let entry = EnrollmentEntry::new(cmd.package_id, package_name.clone(), amount);
        let outcome = self.ledger.enroll_if_absent(&cmd.user_id, entry).await?;
        if outcome == EnrollmentOutcome::AlreadyEnrolled {
            return Err(PaymentFlowError::duplicate_enrollment(
                cmd.user_id,
                cmd.package_id,
            ));
        }

        // Paid record for bookkeeping symmetry with gateway purchases.
        let record = PaymentRecord::new_manual(
            cmd.user_id,
            cmd.package_id,
            package_name.clone(),
            amount,
            self.currency.clone(),
        );
        self.repository.create(&record).await?;

        tracing::info!(
            payment_record_id = %record.id,
            user_id = %cmd.user_id,
            package_id = cmd.package_id,
            "manual enrollment granted"
        );

        let notice = EnrollmentNotice {
            to: contact.email,
            name: contact.name,
            package_name,
            amount,
        };
        if let Err(err) = self.notifier.send(notice).await {
            tracing::warn!(
                user_id = %cmd.user_id,
                error = %err,
                "enrollment notice delivery failed"
            );
        }

        Ok(ManualEnrollResult {
            payment_record_id: record.id,
        })
    }
}
