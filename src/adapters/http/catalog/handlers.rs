//! HTTP handlers for the package catalog endpoint.

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::domain::catalog::PackageCatalog;

use super::dto::{PackageResponse, PackagesResponse};

/// Shared state for catalog endpoints.
#[derive(Clone)]
pub struct CatalogAppState {
    pub catalog: Arc<PackageCatalog>,
}

/// GET /api/packages - List all purchasable packages
///
/// Public endpoint; no authentication required.
pub async fn list_packages(State(state): State<CatalogAppState>) -> impl IntoResponse {
    let response = PackagesResponse {
        packages: state
            .catalog
            .all()
            .iter()
            .map(PackageResponse::from)
            .collect(),
    };

    Json(response)
}
