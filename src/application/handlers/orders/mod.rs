//! Order handlers.
//!
//! Command and query handlers for the purchase flow:
//!
//! ## Commands
//! - Creating payment orders (gateway or mock checkout)
//! - Verifying gateway callbacks and crediting enrollments
//! - Confirming mock orders (non-production)
//!
//! ## Queries
//! - List the caller's payment history

mod create_order;
mod credit;
mod dev_confirm;
mod list_payments;
mod verify_payment;

// Commands
pub use create_order::{
    CheckoutMode, CreateOrderCommand, CreateOrderHandler, CreateOrderResult,
};
pub use dev_confirm::{DevConfirmCommand, DevConfirmHandler, DevConfirmResult};
pub use verify_payment::{VerifyPaymentCommand, VerifyPaymentHandler, VerifyPaymentResult};

// Queries
pub use list_payments::{ListMyPaymentsHandler, ListMyPaymentsQuery, ListMyPaymentsResult};

// Shared reconciliation step
pub use credit::EnrollmentCreditor;
