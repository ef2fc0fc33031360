//! Axum router configuration for the package catalog.

use axum::{routing::get, Router};

use super::handlers::{list_packages, CatalogAppState};

/// Create the catalog API router.
///
/// # Routes
///
/// - `GET /` - List all purchasable packages
pub fn catalog_routes() -> Router<CatalogAppState> {
    Router::new().route("/", get(list_packages))
}
