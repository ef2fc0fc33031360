//! Adapters - concrete implementations of the ports.
//!
//! Organized by technology:
//! - `http` - Axum REST API (inbound)
//! - `postgres` - sqlx-backed persistence
//! - `razorpay` - payment gateway client
//! - `email` - enrollment notification delivery

pub mod email;
pub mod http;
pub mod postgres;
pub mod razorpay;
