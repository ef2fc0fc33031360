//! Razorpay adapter - payment gateway integration.
//!
//! Implements the `PaymentGateway` port against the Razorpay Orders API.
//! Callback signature verification is NOT here: it is pure HMAC math and
//! lives in the domain layer, independent of the HTTP client.

mod client;

pub use client::{RazorpayConfig, RazorpayGateway};
