//! Catalog fixtures.

use serde::Deserialize;

use crate::domain::catalog::{Catalog, CatalogError, models::Product};

/// Bundled demo catalog, the storefront's static product list.
pub const DEMO_CATALOG: &str = include_str!("demo_catalog.yaml");

/// Wrapper for products in YAML.
#[derive(Debug, Deserialize)]
struct CatalogFixture {
    /// Products in display order.
    products: Vec<Product>,
}

/// Parses a YAML catalog fixture and validates it at the boundary.
pub fn from_yaml(yaml: &str) -> Result<Catalog, CatalogError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    Catalog::new(fixture.products)
}
