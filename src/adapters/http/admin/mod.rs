//! HTTP adapter for admin override endpoints.
//!
//! Exposes reconciliation overrides via REST API, restricted to admin callers:
//! - `PATCH /api/admin/payments/:id/mark-paid` - Force a payment record to paid
//! - `POST /api/admin/enroll` - Enroll a user without a gateway payment
//! - `DELETE /api/admin/enroll` - Revoke a user's enrollment

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::AdminAppState;
pub use routes::admin_routes;
