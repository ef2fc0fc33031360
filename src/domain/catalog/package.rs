//! Package definitions and the process-wide catalog.
//!
//! Prices are stored in paise (1 rupee = 100 paise) so monetary math never
//! touches floating point, and because the payment gateway expects amounts
//! in the smallest currency unit.

use serde::{Deserialize, Serialize};

/// A purchasable course package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Catalog-unique identifier.
    pub id: u32,

    /// Display name, denormalized onto payment records at purchase time.
    pub name: String,

    /// Price in paise.
    pub price: i64,

    /// Marketing description.
    pub description: String,

    /// Whether the package is highlighted in listings.
    pub featured: bool,
}

impl Package {
    /// Formats the price for display, e.g. 549900 -> "₹5,499".
    pub fn display_price(&self) -> String {
        let rupees = self.price / 100;
        format!("₹{}", group_digits(rupees))
    }
}

/// Indian-style digit grouping: last three digits, then pairs.
/// 1499900 paise -> 14999 rupees -> "14,999".
fn group_digits(value: i64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let n = bytes.len();
    if n <= 3 {
        return digits;
    }

    let mut out = String::with_capacity(n + n / 2);
    let head = &digits[..n - 3];
    let mut first = true;
    let mut rem = head.len();
    let mut pos = 0;
    while rem > 0 {
        let take = if first && rem % 2 == 1 { 1 } else { 2 };
        out.push_str(&head[pos..pos + take]);
        out.push(',');
        pos += take;
        rem -= take;
        first = false;
    }
    out.push_str(&digits[n - 3..]);
    out
}

/// Immutable lookup of purchasable packages.
///
/// Built once at startup; services receive it via `Arc<PackageCatalog>`.
#[derive(Debug, Clone)]
pub struct PackageCatalog {
    packages: Vec<Package>,
}

impl PackageCatalog {
    /// Builds a catalog from an explicit package list.
    pub fn new(packages: Vec<Package>) -> Self {
        Self { packages }
    }

    /// The standard SkillBridge offering.
    pub fn standard() -> Self {
        let pkg = |id: u32, name: &str, price: i64, description: &str, featured: bool| Package {
            id,
            name: name.to_string(),
            price,
            description: description.to_string(),
            featured,
        };

        Self::new(vec![
            pkg(
                1,
                "STARTER PACKAGE",
                50_000,
                "Begin your digital journey with fundamental skills.",
                false,
            ),
            pkg(
                2,
                "BASIC PACKAGE",
                149_900,
                "Expand your knowledge with essential digital marketing modules.",
                false,
            ),
            pkg(
                3,
                "SILVER PACKAGE",
                299_900,
                "Build intermediate expertise with live mentoring and resources.",
                false,
            ),
            pkg(
                4,
                "GOLD PACKAGE",
                549_900,
                "Master advanced strategies with real-world case studies and 1:1 mentoring.",
                true,
            ),
            pkg(
                5,
                "DIAMOND PACKAGE",
                999_900,
                "Full suite of professional courses with personal mentoring and exclusive content.",
                false,
            ),
            pkg(
                6,
                "PREMIUM PACKAGE",
                1_499_900,
                "The ultimate package — all courses, all features, lifetime access and dedicated support.",
                false,
            ),
        ])
    }

    /// Looks up a package by id.
    pub fn find(&self, package_id: u32) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == package_id)
    }

    /// All packages in catalog order.
    pub fn all(&self) -> &[Package] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}
