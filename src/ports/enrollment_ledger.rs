//! Enrollment ledger port.
//!
//! The ledger lives inside the user's profile document, owned by the user
//! collaborator. This port exposes exactly the operations the payment flow
//! needs: membership checks, the atomic crediting step, and admin revocation.

use async_trait::async_trait;

use crate::domain::enrollment::EnrollmentEntry;
use crate::domain::foundation::{DomainError, UserId};

/// Result of the atomic crediting operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    /// A new ledger entry was appended.
    Credited,
    /// The ledger already contained this package; nothing was appended.
    AlreadyEnrolled,
}

/// Read/write access to a user's enrollment ledger.
#[async_trait]
pub trait EnrollmentLedger: Send + Sync {
    /// All entries in the user's ledger, in append order.
    async fn entries(&self, user_id: &UserId) -> Result<Vec<EnrollmentEntry>, DomainError>;

    /// Whether the ledger contains an entry for this package id.
    async fn is_enrolled(&self, user_id: &UserId, package_id: u32) -> Result<bool, DomainError> {
        Ok(self
            .entries(user_id)
            .await?
            .iter()
            .any(|e| e.package_id == package_id))
    }

    /// Appends `entry` unless an entry with the same package id exists.
    ///
    /// This is the idempotency boundary of the whole flow: implementations
    /// MUST perform the membership check and the append as one atomic
    /// read-modify-write, so that two racing verification calls produce
    /// exactly one entry.
    async fn enroll_if_absent(
        &self,
        user_id: &UserId,
        entry: EnrollmentEntry,
    ) -> Result<EnrollmentOutcome, DomainError>;

    /// Removes the entry for `package_id`.
    ///
    /// Returns false when no such entry exists. Never touches payment
    /// records.
    async fn revoke(&self, user_id: &UserId, package_id: u32) -> Result<bool, DomainError>;
}
