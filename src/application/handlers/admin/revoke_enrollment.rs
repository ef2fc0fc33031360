//! RevokeEnrollmentHandler - Admin override removing a ledger entry.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::payment::PaymentFlowError;
use crate::ports::{EnrollmentLedger, UserDirectory};

/// Command to remove a user's enrollment in a package.
#[derive(Debug, Clone)]
pub struct RevokeEnrollmentCommand {
    pub user_id: UserId,
    pub package_id: u32,
}

/// Result of a revocation.
#[derive(Debug, Clone)]
pub struct RevokeEnrollmentResult {
    pub user_id: UserId,
    pub package_id: u32,
}

/// Handler for the admin revoke override.
///
/// Removes only the ledger entry; payment records stay untouched as the
/// historical account of what was paid.
pub struct RevokeEnrollmentHandler {
    ledger: Arc<dyn EnrollmentLedger>,
    users: Arc<dyn UserDirectory>,
}

impl RevokeEnrollmentHandler {
    pub fn new(ledger: Arc<dyn EnrollmentLedger>, users: Arc<dyn UserDirectory>) -> Self {
        Self { ledger, users }
    }

    pub async fn handle(
        &self,
        cmd: RevokeEnrollmentCommand,
    ) -> Result<RevokeEnrollmentResult, PaymentFlowError> {
        if self.users.contact(&cmd.user_id).await?.is_none() {
            return Err(PaymentFlowError::UserNotFound(cmd.user_id));
        }

        let removed = self.ledger.revoke(&cmd.user_id, cmd.package_id).await?;
        if !removed {
            return Err(PaymentFlowError::enrollment_not_found(
                cmd.user_id,
                cmd.package_id,
            ));
        }

        tracing::info!(
            user_id = %cmd.user_id,
            package_id = cmd.package_id,
            "enrollment revoked"
        );

        Ok(RevokeEnrollmentResult {
            user_id: cmd.user_id,
            package_id: cmd.package_id,
        })
    }
}
