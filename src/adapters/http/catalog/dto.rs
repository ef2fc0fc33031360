//! HTTP DTOs for the package catalog endpoint.

use serde::Serialize;

use crate::domain::catalog::Package;

/// One purchasable package.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub id: u32,
    pub name: String,
    /// Price in paise.
    pub price: i64,
    /// Rupee display string, e.g. `₹5,499`.
    pub display_price: String,
    pub description: String,
    pub featured: bool,
}

impl From<&Package> for PackageResponse {
    fn from(package: &Package) -> Self {
        Self {
            id: package.id,
            name: package.name.clone(),
            price: package.price,
            display_price: package.display_price(),
            description: package.description.clone(),
            featured: package.featured,
        }
    }
}

/// Response for the catalog listing.
#[derive(Debug, Clone, Serialize)]
pub struct PackagesResponse {
    pub packages: Vec<PackageResponse>,
}
