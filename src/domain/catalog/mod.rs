//! Catalog
//!
//! Read-only accessor over the static product list. Products are owned by
//! the catalog and never mutated by the cart subsystem; the cart stores a
//! copy taken at add-time.

mod errors;
mod filter;
mod fixtures;
mod models;

pub use errors::CatalogError;
pub use filter::ProductFilter;
pub use models::{Product, ProductId};

use rustc_hash::FxHashMap;

/// Number of products a recommendation query returns at most.
const RECOMMENDATION_LIMIT: usize = 4;

/// Immutable, id-indexed product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
    index: FxHashMap<ProductId, usize>,
}

impl Catalog {
    /// Builds a catalog, validating the records at the boundary.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::DuplicateId`] if two products share an id.
    /// - [`CatalogError::InvalidRating`] if a rating falls outside `0..=5`.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut index = FxHashMap::default();

        for (position, product) in products.iter().enumerate() {
            if !(0.0..=5.0).contains(&product.rating) {
                return Err(CatalogError::InvalidRating {
                    id: product.id,
                    rating: product.rating,
                });
            }

            if index.insert(product.id, position).is_some() {
                return Err(CatalogError::DuplicateId(product.id));
            }
        }

        Ok(Self { products, index })
    }

    /// Parses a YAML catalog fixture.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] on malformed YAML or invalid records.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        fixtures::from_yaml(yaml)
    }

    /// The bundled demo catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the bundled fixture is invalid.
    pub fn demo() -> Result<Self, CatalogError> {
        Self::from_yaml(fixtures::DEMO_CATALOG)
    }

    /// Looks a product up by id.
    #[must_use]
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).and_then(|at| self.products.get(*at))
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products matching every criterion of `filter`, in catalog order.
    #[must_use]
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }

    /// Up to four products related to the given wishlist: same category or
    /// brand first, topped up with the most-reviewed products. With an
    /// empty wishlist, new arrivals followed by the most-reviewed.
    #[must_use]
    pub fn recommendations(&self, wishlist: &[Product]) -> Vec<&Product> {
        let wishlist_ids: Vec<ProductId> = wishlist.iter().map(|product| product.id).collect();

        let mut picks: Vec<&Product> = if wishlist.is_empty() {
            self.products
                .iter()
                .filter(|product| product.is_new)
                .take(RECOMMENDATION_LIMIT)
                .collect()
        } else {
            self.products
                .iter()
                .filter(|product| !wishlist_ids.contains(&product.id))
                .filter(|product| {
                    wishlist.iter().any(|saved| {
                        saved.category == product.category || saved.brand == product.brand
                    })
                })
                .take(RECOMMENDATION_LIMIT)
                .collect()
        };

        if picks.len() < RECOMMENDATION_LIMIT {
            let mut trending: Vec<&Product> = self
                .products
                .iter()
                .filter(|product| !wishlist_ids.contains(&product.id))
                .filter(|product| !picks.iter().any(|picked| picked.id == product.id))
                .collect();

            trending.sort_by(|a, b| b.reviews.cmp(&a.reviews));

            picks.extend(trending.into_iter().take(RECOMMENDATION_LIMIT - picks.len()));
        }

        picks
    }
}
