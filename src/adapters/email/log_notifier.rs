//! Logging stand-in for EnrollmentNotifier when no mailer is configured.

use async_trait::async_trait;

use crate::ports::{EnrollmentNotice, EnrollmentNotifier, NotifyError};

/// Logs enrollment notices instead of delivering them.
///
/// Used in development and anywhere RESEND_API_KEY is absent, so the
/// reconciliation flow behaves identically with and without a mailer.
pub struct LogNotifier;

#[async_trait]
impl EnrollmentNotifier for LogNotifier {
    async fn send(&self, notice: EnrollmentNotice) -> Result<(), NotifyError> {
        tracing::info!(
            to = %notice.to,
            package_name = %notice.package_name,
            amount = notice.amount,
            "Email delivery disabled; enrollment notice logged only"
        );
        Ok(())
    }
}
