//! Enrollment notification port.
//!
//! Fire-and-forget: the reconciliation flow logs send failures and moves on.
//! Implementations must never block the core flow on delivery.

use async_trait::async_trait;

/// Contents of an enrollment confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentNotice {
    /// Recipient address.
    pub to: String,

    /// Recipient display name.
    pub name: String,

    /// Purchased package name.
    pub package_name: String,

    /// Amount paid, in paise.
    pub amount: i64,
}

/// Notification delivery failure. Logged by callers, never propagated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError(pub String);

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification failed: {}", self.0)
    }
}

impl std::error::Error for NotifyError {}

/// Sends enrollment/welcome messages.
#[async_trait]
pub trait EnrollmentNotifier: Send + Sync {
    async fn send(&self, notice: EnrollmentNotice) -> Result<(), NotifyError>;
}
