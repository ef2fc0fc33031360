//! Payment record aggregate and callback verification.
//!
//! A `PaymentRecord` tracks one purchase attempt through its status
//! lifecycle. The `CallbackVerifier` authenticates gateway callbacks with a
//! keyed hash before any state is allowed to change.

mod errors;
mod record;
mod signature;
mod status;

pub use errors::PaymentFlowError;
pub use record::PaymentRecord;
pub use signature::CallbackVerifier;
pub use status::PaymentStatus;

#[cfg(test)]
pub use signature::compute_test_signature;
