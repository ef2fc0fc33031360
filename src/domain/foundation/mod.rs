//! Shared building blocks for the domain layer.
//!
//! Identifier newtypes, the `Timestamp` value object and the common
//! `DomainError`/`ErrorCode` pair used across aggregates and ports.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode};
pub use ids::{PaymentId, UserId};
pub use timestamp::Timestamp;
