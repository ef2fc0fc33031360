//! Admin override handlers.
//!
//! Reconciliation overrides restricted to administrative callers:
//!
//! - Forcing a payment record to paid
//! - Granting an enrollment without a gateway payment
//! - Revoking an enrollment

mod manual_enroll;
mod mark_paid;
mod revoke_enrollment;

pub use manual_enroll::{ManualEnrollCommand, ManualEnrollHandler, ManualEnrollResult};
pub use mark_paid::{MarkPaidCommand, MarkPaidHandler, MarkPaidResult};
pub use revoke_enrollment::{
    RevokeEnrollmentCommand, RevokeEnrollmentHandler, RevokeEnrollmentResult,
};
