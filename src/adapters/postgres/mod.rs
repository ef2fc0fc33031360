//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresPaymentRecordRepository` - Payment record persistence
//! - `PostgresEnrollmentLedger` - Enrollment ledger embedded in the users table
//! - `PostgresUserDirectory` - Read-only contact lookup

mod enrollment_ledger;
mod payment_repository;
mod user_directory;

pub use enrollment_ledger::PostgresEnrollmentLedger;
pub use payment_repository::PostgresPaymentRecordRepository;
pub use user_directory::PostgresUserDirectory;
