//! EnrollmentCreditor - shared reconciliation step that settles a payment
//! record and credits the owner's ledger exactly once.
//!
//! Used by gateway verification, mock confirmation and the admin mark-paid
//! override so all three paths share one idempotency boundary.

use std::sync::Arc;

use crate::domain::enrollment::EnrollmentEntry;
use crate::domain::payment::{PaymentFlowError, PaymentRecord, PaymentStatus};
use crate::ports::{
    EnrollmentLedger, EnrollmentNotice, EnrollmentNotifier, EnrollmentOutcome,
    PaymentRecordRepository, UserDirectory,
};

/// Settles a payment record and credits the enrollment ledger.
pub struct EnrollmentCreditor {
    repository: Arc<dyn PaymentRecordRepository>,
    ledger: Arc<dyn EnrollmentLedger>,
    users: Arc<dyn UserDirectory>,
    notifier: Arc<dyn EnrollmentNotifier>,
}

impl EnrollmentCreditor {
    pub fn new(
        repository: Arc<dyn PaymentRecordRepository>,
        ledger: Arc<dyn EnrollmentLedger>,
        users: Arc<dyn UserDirectory>,
        notifier: Arc<dyn EnrollmentNotifier>,
    ) -> Self {
        Self {
            repository,
            ledger,
            users,
            notifier,
        }
    }

    /// Credits the record's owner and marks the record paid.
    ///
    /// The ledger entry is built from the record's denormalized package name
    /// and amount, never re-derived from the live catalog. The ledger append
    /// happens before the status write so a retried call that finds the
    /// record still pending converges to the same end state.
    ///
    /// Sends the enrollment notice only when a new entry was appended; send
    /// failures are logged and swallowed.
    pub async fn credit(
        &self,
        record: &mut PaymentRecord,
    ) -> Result<EnrollmentOutcome, PaymentFlowError> {
        if record.status == PaymentStatus::Refunded {
            return Err(PaymentFlowError::invalid_state(
                record.status.as_str(),
                "mark paid",
            ));
        }

        let entry = EnrollmentEntry::new(
            record.package_id,
            record.package_name.clone(),
            record.amount,
        );
        let outcome = self.ledger.enroll_if_absent(&record.user_id, entry).await?;

        record.mark_paid()?;
        self.repository.update(record).await?;

        if outcome == EnrollmentOutcome::Credited {
            self.send_notice(record).await;
        }

        Ok(outcome)
    }

    async fn send_notice(&self, record: &PaymentRecord) {
        let contact = match self.users.contact(&record.user_id).await {
            Ok(Some(contact)) => contact,
            Ok(None) => return,
            Err(err) => {
                tracing::warn!(
                    user_id = %record.user_id,
                    error = %err,
                    "could not load contact for enrollment notice"
                );
                return;
            }
        };

        let notice = EnrollmentNotice {
            to: contact.email,
            name: contact.name,
            package_name: record.package_name.clone(),
            amount: record.amount,
        };

        if let Err(err) = self.notifier.send(notice).await {
            tracing::warn!(
                user_id = %record.user_id,
                package_id = record.package_id,
                error = %err,
                "enrollment notice delivery failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{
        test_contact, InMemoryLedger, InMemoryPayments, RecordingNotifier, StaticDirectory,
    };
    use crate::domain::foundation::UserId;

    fn creditor_for(
        user_id: UserId,
        record: &PaymentRecord,
    ) -> (
        EnrollmentCreditor,
        Arc<InMemoryPayments>,
        Arc<InMemoryLedger>,
        Arc<RecordingNotifier>,
    ) {
        let repo = Arc::new(InMemoryPayments::with_record(record.clone()));
        let ledger = Arc::new(InMemoryLedger::with_user(user_id));
        let users = Arc::new(StaticDirectory::with_contact(user_id, test_contact()));
        let notifier = Arc::new(RecordingNotifier::new());
        let creditor = EnrollmentCreditor::new(
            repo.clone(),
            ledger.clone(),
            users.clone(),
            notifier.clone(),
        );
        (creditor, repo, ledger, notifier)
    }

    fn pending_record(user_id: UserId) -> PaymentRecord {
        PaymentRecord::new_gateway_order(user_id, 4, "GOLD PACKAGE", 549_900, "INR", "order_abc")
    }

    #[tokio::test]
    async fn credits_ledger_and_marks_paid() {
        let user_id = UserId::new();
        let mut record = pending_record(user_id);
        let (creditor, repo, ledger, _) = creditor_for(user_id, &record);

        let outcome = creditor.credit(&mut record).await.unwrap();

        assert_eq!(outcome, EnrollmentOutcome::Credited);
        assert_eq!(record.status, PaymentStatus::Paid);
        assert_eq!(repo.records()[0].status, PaymentStatus::Paid);

        let entries = ledger.entries_for(&user_id);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].package_id, 4);
        assert_eq!(entries[0].package_name, "GOLD PACKAGE");
        assert_eq!(entries[0].amount, 549_900);
    }

    #[tokio::test]
    async fn second_credit_leaves_ledger_unchanged() {
        let user_id = UserId::new();
        let mut record = pending_record(user_id);
        let (creditor, _, ledger, _) = creditor_for(user_id, &record);

        creditor.credit(&mut record).await.unwrap();
        let outcome = creditor.credit(&mut record).await.unwrap();

        assert_eq!(outcome, EnrollmentOutcome::AlreadyEnrolled);
        assert_eq!(ledger.entries_for(&user_id).len(), 1);
    }

    #[tokio::test]
    async fn entry_uses_stored_fields_not_live_catalog() {
        let user_id = UserId::new();
        // Price recorded at order time differs from today's catalog price.
        let mut record = PaymentRecord::new_gateway_order(
            user_id,
            4,
            "GOLD PACKAGE (2024)",
            499_900,
            "INR",
            "order_abc",
        );
        let (creditor, _, ledger, _) = creditor_for(user_id, &record);

        creditor.credit(&mut record).await.unwrap();

        let entries = ledger.entries_for(&user_id);
        assert_eq!(entries[0].package_name, "GOLD PACKAGE (2024)");
        assert_eq!(entries[0].amount, 499_900);
    }

    #[tokio::test]
    async fn notifies_on_new_enrollment_only() {
        let user_id = UserId::new();
        let mut record = pending_record(user_id);
        let (creditor, _, _, notifier) = creditor_for(user_id, &record);

        creditor.credit(&mut record).await.unwrap();
        creditor.credit(&mut record).await.unwrap();

        let notices = notifier.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].to, "asha@example.com");
        assert_eq!(notices[0].package_name, "GOLD PACKAGE");
    }

    #[tokio::test]
    async fn notification_failure_does_not_fail_credit() {
        let user_id = UserId::new();
        let mut record = pending_record(user_id);
        let repo = Arc::new(InMemoryPayments::with_record(record.clone()));
        let ledger = Arc::new(InMemoryLedger::with_user(user_id));
        let users = Arc::new(StaticDirectory::with_contact(user_id, test_contact()));
        let creditor = EnrollmentCreditor::new(
            repo,
            ledger.clone(),
            users,
            Arc::new(RecordingNotifier::failing()),
        );

        let outcome = creditor.credit(&mut record).await.unwrap();

        assert_eq!(outcome, EnrollmentOutcome::Credited);
        assert_eq!(record.status, PaymentStatus::Paid);
        assert_eq!(ledger.entries_for(&user_id).len(), 1);
    }

    #[tokio::test]
    async fn refuses_refunded_record() {
        let user_id = UserId::new();
        let mut record = pending_record(user_id);
        record.status = PaymentStatus::Refunded;
        let (creditor, _, ledger, _) = creditor_for(user_id, &record);

        let err = creditor.credit(&mut record).await.unwrap_err();

        assert!(matches!(err, PaymentFlowError::InvalidState { .. }));
        assert!(ledger.entries_for(&user_id).is_empty());
    }
}
