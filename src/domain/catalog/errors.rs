//! Catalog errors.

use thiserror::Error;

use crate::domain::catalog::models::ProductId;

/// Catalog construction and fixture-parsing errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// YAML parsing error.
    #[error("failed to parse catalog YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Two products share the same id.
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),

    /// A product rating falls outside `0..=5`.
    #[error("product {id} has rating {rating} outside 0..=5")]
    InvalidRating {
        /// Offending product.
        id: ProductId,
        /// Rating as supplied.
        rating: f32,
    },
}
