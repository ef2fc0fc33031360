//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.

pub mod admin;
pub mod catalog;
pub mod error;
pub mod extractors;
pub mod orders;

// Re-export key types for convenience
pub use admin::{admin_routes, AdminAppState};
pub use catalog::{catalog_routes, CatalogAppState};
pub use error::{ApiError, ErrorResponse};
pub use extractors::{AdminUser, AuthenticatedUser};
pub use orders::{orders_routes, OrdersAppState};
