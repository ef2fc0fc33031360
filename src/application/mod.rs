//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;

pub use handlers::orders::{
    // Commands
    CreateOrderCommand, CreateOrderHandler, CreateOrderResult,
    DevConfirmCommand, DevConfirmHandler, DevConfirmResult,
    VerifyPaymentCommand, VerifyPaymentHandler, VerifyPaymentResult,
    // Queries
    ListMyPaymentsHandler, ListMyPaymentsQuery, ListMyPaymentsResult,
    // Shared
    CheckoutMode, EnrollmentCreditor,
};

pub use handlers::admin::{
    ManualEnrollCommand, ManualEnrollHandler, ManualEnrollResult,
    MarkPaidCommand, MarkPaidHandler, MarkPaidResult,
    RevokeEnrollmentCommand, RevokeEnrollmentHandler, RevokeEnrollmentResult,
};
