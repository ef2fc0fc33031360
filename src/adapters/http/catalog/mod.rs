//! HTTP adapter for the package catalog.
//!
//! - `GET /api/packages` - List all purchasable packages (public)

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::CatalogAppState;
pub use routes::catalog_routes;
