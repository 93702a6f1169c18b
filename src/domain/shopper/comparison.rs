//! Product comparison set.

use std::sync::Arc;

use thiserror::Error;

use crate::{
    domain::catalog::{Product, ProductId},
    remote::{LocalStore, LocalStoreError},
};

const KEY: &str = "productComparison";

/// Products compared side by side at most.
const CAP: usize = 4;

/// Comparison set errors.
#[derive(Debug, Error)]
pub enum ComparisonError {
    /// The set already holds the maximum number of products.
    #[error("you can compare up to {CAP} products")]
    Full,

    /// The local store rejected the write.
    #[error(transparent)]
    Store(#[from] LocalStoreError),
}

/// Set of products picked for side-by-side comparison, capped at four.
pub struct ComparisonSet {
    store: Arc<dyn LocalStore>,
}

impl std::fmt::Debug for ComparisonSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComparisonSet").finish_non_exhaustive()
    }
}

impl ComparisonSet {
    /// Creates the set over the local store.
    #[must_use]
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// Adds a product. Returns `false` when it was already in the set.
    ///
    /// # Errors
    ///
    /// - [`ComparisonError::Full`] at four products.
    /// - [`ComparisonError::Store`] when persisting fails.
    pub fn add(&self, product: &Product) -> Result<bool, ComparisonError> {
        let mut entries = self.list();

        if entries.iter().any(|entry| entry.id == product.id) {
            return Ok(false);
        }

        if entries.len() >= CAP {
            return Err(ComparisonError::Full);
        }

        entries.push(product.clone());
        self.persist(&entries)?;

        Ok(true)
    }

    /// Removes a product; absent ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ComparisonError::Store`] when persisting fails.
    pub fn remove(&self, id: ProductId) -> Result<(), ComparisonError> {
        let mut entries = self.list();
        let before = entries.len();
        entries.retain(|entry| entry.id != id);

        if entries.len() != before {
            self.persist(&entries)?;
        }

        Ok(())
    }

    /// The compared products, in pick order.
    #[must_use]
    pub fn list(&self) -> Vec<Product> {
        self.store
            .get_item(KEY)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    /// Empties the set.
    pub fn clear(&self) {
        self.store.remove_item(KEY);
    }

    fn persist(&self, entries: &[Product]) -> Result<(), LocalStoreError> {
        let value = serde_json::to_value(entries).map_err(|error| LocalStoreError::Write {
            key: KEY.to_owned(),
            reason: error.to_string(),
        })?;

        self.store.set_item(KEY, value)
    }
}
