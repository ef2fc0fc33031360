//! VerifyPaymentHandler - Command handler for gateway callback verification.

use std::sync::Arc;

use crate::domain::foundation::PaymentId;
use crate::domain::payment::{CallbackVerifier, PaymentFlowError};
use crate::ports::{EnrollmentOutcome, PaymentRecordRepository};

use super::credit::EnrollmentCreditor;

/// Command carrying a gateway checkout callback.
#[derive(Debug, Clone)]
pub struct VerifyPaymentCommand {
    /// Record created during order initiation.
    pub payment_record_id: PaymentId,
    /// Order id echoed by the gateway.
    pub gateway_order_id: String,
    /// Payment id issued by the gateway.
    pub gateway_payment_id: String,
    /// Hex HMAC signature over `"{order_id}|{payment_id}"`.
    pub gateway_signature: String,
}

/// Result of a verified callback.
#[derive(Debug, Clone)]
pub enum VerifyPaymentResult {
    /// The ledger gained a new entry for this package.
    Credited { payment_record_id: PaymentId },
    /// The ledger already held this package; record is paid, nothing appended.
    AlreadyEnrolled { payment_record_id: PaymentId },
}

/// Handler for verifying gateway callbacks and crediting enrollments.
pub struct VerifyPaymentHandler {
    repository: Arc<dyn PaymentRecordRepository>,
    verifier: Arc<CallbackVerifier>,
    creditor: Arc<EnrollmentCreditor>,
}

impl VerifyPaymentHandler {
    pub fn new(
        repository: Arc<dyn PaymentRecordRepository>,
        verifier: Arc<CallbackVerifier>,
        creditor: Arc<EnrollmentCreditor>,
    ) -> Self {
        Self {
            repository,
            verifier,
            creditor,
        }
    }

    pub async fn handle(
        &self,
        cmd: VerifyPaymentCommand,
    ) -> Result<VerifyPaymentResult, PaymentFlowError> {
        let mut record = self
            .repository
            .find_by_id(&cmd.payment_record_id)
            .await?
            .ok_or(PaymentFlowError::PaymentNotFound(cmd.payment_record_id))?;

        // The signature only authenticates the (order, payment) pair, so the
        // order id must also be the one bound to this record. Otherwise a
        // valid triple from one purchase could settle another user's record.
        let order_matches =
            record.gateway_order_id.as_deref() == Some(cmd.gateway_order_id.as_str());

        if !order_matches
            || !self.verifier.verify(
                &cmd.gateway_order_id,
                &cmd.gateway_payment_id,
                &cmd.gateway_signature,
            )
        {
            record.mark_failed(&cmd.gateway_payment_id);
            self.repository.update(&record).await?;
            tracing::warn!(
                payment_record_id = %record.id,
                gateway_order_id = %cmd.gateway_order_id,
                "callback signature rejected"
            );
            return Err(PaymentFlowError::SignatureMismatch);
        }

        record.attach_gateway(
            &cmd.gateway_order_id,
            &cmd.gateway_payment_id,
            &cmd.gateway_signature,
        );

        let outcome = self.creditor.credit(&mut record).await?;

        Ok(match outcome {
            EnrollmentOutcome::Credited => VerifyPaymentResult::Credited {
                payment_record_id: record.id,
            },
            EnrollmentOutcome::AlreadyEnrolled => VerifyPaymentResult::AlreadyEnrolled {
                payment_record_id: record.id,
            },
        })
    }
}
