//! Payment-flow error taxonomy.
//!
//! Every failure surfaced by the order initiation, verification and admin
//! override services. Each variant maps to a stable machine-checkable code
//! and a human-readable message; none of them is retried by the service
//! itself.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidPackage | 400 |
//! | AlreadyEnrolled | 409 |
//! | OrderCreationFailed | 502 |
//! | SignatureMismatch | 400 |
//! | PaymentNotFound | 404 |
//! | DuplicateEnrollment | 409 |
//! | EnrollmentNotFound | 404 |
//! | UserNotFound | 404 |
//! | InvalidState | 409 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{DomainError, ErrorCode, PaymentId, UserId};

/// Errors surfaced by the enrollment/payment flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentFlowError {
    /// The requested package id is not in the catalog.
    InvalidPackage(u32),

    /// The user's ledger already contains this package.
    AlreadyEnrolled { user_id: UserId, package_id: u32 },

    /// The gateway rejected or failed the order creation call.
    OrderCreationFailed { reason: String },

    /// The callback signature did not match the recomputed digest.
    SignatureMismatch,

    /// No payment record exists with this id.
    PaymentNotFound(PaymentId),

    /// Manual enrollment attempted for an already-enrolled package.
    DuplicateEnrollment { user_id: UserId, package_id: u32 },

    /// Revocation attempted for a package the user is not enrolled in.
    EnrollmentNotFound { user_id: UserId, package_id: u32 },

    /// The referenced user does not exist.
    UserNotFound(UserId),

    /// The record's current status does not allow the operation.
    InvalidState { current: String, attempted: String },

    /// Request-level validation failed.
    ValidationFailed { field: String, message: String },

    /// Persistence or other infrastructure failure.
    Infrastructure(String),
}

impl PaymentFlowError {
    pub fn invalid_package(package_id: u32) -> Self {
        PaymentFlowError::InvalidPackage(package_id)
    }

    pub fn already_enrolled(user_id: UserId, package_id: u32) -> Self {
        PaymentFlowError::AlreadyEnrolled {
            user_id,
            package_id,
        }
    }

    pub fn order_creation_failed(reason: impl Into<String>) -> Self {
        PaymentFlowError::OrderCreationFailed {
            reason: reason.into(),
        }
    }

    pub fn signature_mismatch() -> Self {
        PaymentFlowError::SignatureMismatch
    }

    pub fn payment_not_found(id: PaymentId) -> Self {
        PaymentFlowError::PaymentNotFound(id)
    }

    pub fn duplicate_enrollment(user_id: UserId, package_id: u32) -> Self {
        PaymentFlowError::DuplicateEnrollment {
            user_id,
            package_id,
        }
    }

    pub fn enrollment_not_found(user_id: UserId, package_id: u32) -> Self {
        PaymentFlowError::EnrollmentNotFound {
            user_id,
            package_id,
        }
    }

    pub fn user_not_found(user_id: UserId) -> Self {
        PaymentFlowError::UserNotFound(user_id)
    }

    pub fn invalid_state(current: impl Into<String>, attempted: impl Into<String>) -> Self {
        PaymentFlowError::InvalidState {
            current: current.into(),
            attempted: attempted.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PaymentFlowError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PaymentFlowError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PaymentFlowError::InvalidPackage(_) => ErrorCode::InvalidPackage,
            PaymentFlowError::AlreadyEnrolled { .. } => ErrorCode::AlreadyEnrolled,
            PaymentFlowError::OrderCreationFailed { .. } => ErrorCode::OrderCreationFailed,
            PaymentFlowError::SignatureMismatch => ErrorCode::SignatureMismatch,
            PaymentFlowError::PaymentNotFound(_) => ErrorCode::PaymentNotFound,
            PaymentFlowError::DuplicateEnrollment { .. } => ErrorCode::DuplicateEnrollment,
            PaymentFlowError::EnrollmentNotFound { .. } => ErrorCode::EnrollmentNotFound,
            PaymentFlowError::UserNotFound(_) => ErrorCode::UserNotFound,
            PaymentFlowError::InvalidState { .. } => ErrorCode::InvalidStateTransition,
            PaymentFlowError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PaymentFlowError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns a user-friendly error message.
    pub fn message(&self) -> String {
        match self {
            PaymentFlowError::InvalidPackage(id) => format!("Invalid package: {}", id),
            PaymentFlowError::AlreadyEnrolled { package_id, .. } => {
                format!("Already enrolled in package {}", package_id)
            }
            PaymentFlowError::OrderCreationFailed { reason } => {
                format!("Could not create payment order: {}", reason)
            }
            PaymentFlowError::SignatureMismatch => {
                "Payment verification failed. Signature mismatch.".to_string()
            }
            PaymentFlowError::PaymentNotFound(id) => {
                format!("Payment record not found: {}", id)
            }
            PaymentFlowError::DuplicateEnrollment { package_id, .. } => {
                format!("User is already enrolled in package {}", package_id)
            }
            PaymentFlowError::EnrollmentNotFound { package_id, .. } => {
                format!("No enrollment found for package {}", package_id)
            }
            PaymentFlowError::UserNotFound(id) => format!("User not found: {}", id),
            PaymentFlowError::InvalidState { current, attempted } => {
                format!("Cannot {} a payment in status {}", attempted, current)
            }
            PaymentFlowError::ValidationFailed { field, message } => {
                format!("Invalid {}: {}", field, message)
            }
            PaymentFlowError::Infrastructure(msg) => format!("Internal error: {}", msg),
        }
    }
}

impl std::fmt::Display for PaymentFlowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl std::error::Error for PaymentFlowError {}

impl From<DomainError> for PaymentFlowError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::InvalidStateTransition => {
                PaymentFlowError::invalid_state("unknown", err.message)
            }
            _ => PaymentFlowError::Infrastructure(err.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            PaymentFlowError::signature_mismatch().code().to_string(),
            "SIGNATURE_MISMATCH"
        );
        assert_eq!(
            PaymentFlowError::invalid_package(42).code().to_string(),
            "INVALID_PACKAGE"
        );
        assert_eq!(
            PaymentFlowError::order_creation_failed("boom").code().to_string(),
            "ORDER_CREATION_FAILED"
        );
    }

    #[test]
    fn messages_are_human_readable() {
        let err = PaymentFlowError::already_enrolled(UserId::new(), 4);
        assert_eq!(err.message(), "Already enrolled in package 4");

        let err = PaymentFlowError::payment_not_found(PaymentId::new());
        assert!(err.message().starts_with("Payment record not found"));
    }

    #[test]
    fn display_includes_code_and_message() {
        let err = PaymentFlowError::signature_mismatch();
        let text = err.to_string();
        assert!(text.contains("SIGNATURE_MISMATCH"));
        assert!(text.contains("Signature mismatch"));
    }
}
