//! Ports: contracts between the application layer and the outside world.
//!
//! Each port is an async trait implemented by an adapter. Application
//! handlers depend only on these traits, never on concrete adapters.

mod enrollment_ledger;
mod notifier;
mod payment_gateway;
mod payment_repository;
mod user_directory;

pub use enrollment_ledger::{EnrollmentLedger, EnrollmentOutcome};
pub use notifier::{EnrollmentNotice, EnrollmentNotifier, NotifyError};
pub use payment_gateway::{GatewayError, GatewayOrder, OrderNotes, OrderRequest, PaymentGateway};
pub use payment_repository::PaymentRecordRepository;
pub use user_directory::UserDirectory;
