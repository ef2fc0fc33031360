//! HTTP adapter for order endpoints.
//!
//! Exposes the purchase flow via REST API:
//! - `POST /api/orders` - Create a payment order
//! - `POST /api/orders/verify` - Verify a gateway callback
//! - `POST /api/orders/dev-confirm` - Confirm a mock order (non-production)
//! - `GET /api/orders/my-payments` - The caller's payment history

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::OrdersAppState;
pub use routes::orders_routes;
