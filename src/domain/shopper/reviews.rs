//! Locally cached product reviews.

use std::sync::Arc;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    domain::catalog::ProductId,
    remote::{LocalStore, LocalStoreError},
};

/// A shopper-written review for one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Display name of the reviewer.
    pub author: String,

    /// Star rating, 1 through 5.
    pub rating: u8,

    /// Free-form review text.
    pub text: String,

    /// When the review was written.
    pub created_at: Timestamp,
}

/// Review errors.
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Rating outside 1..=5.
    #[error("rating {0} is out of range, expected 1 to 5")]
    InvalidRating(u8),

    /// The local store rejected the write.
    #[error(transparent)]
    Store(#[from] LocalStoreError),
}

/// Per-product review lists kept in the local store, newest first.
pub struct Reviews {
    store: Arc<dyn LocalStore>,
}

impl std::fmt::Debug for Reviews {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reviews").finish_non_exhaustive()
    }
}

fn key(product: ProductId) -> String {
    format!("reviews_{product}")
}

impl Reviews {
    /// Creates the review cache over the local store.
    #[must_use]
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// Adds a review for `product`, newest first.
    ///
    /// # Errors
    ///
    /// - [`ReviewError::InvalidRating`] when the rating is not 1..=5.
    /// - [`ReviewError::Store`] when persisting fails.
    pub fn add(&self, product: ProductId, review: Review) -> Result<(), ReviewError> {
        if !(1..=5).contains(&review.rating) {
            return Err(ReviewError::InvalidRating(review.rating));
        }

        let key = key(product);
        let mut reviews = self.load(&key);
        reviews.insert(0, review);

        let value = serde_json::to_value(&reviews).map_err(|error| LocalStoreError::Write {
            key: key.clone(),
            reason: error.to_string(),
        })?;

        self.store.set_item(&key, value)?;

        Ok(())
    }

    /// Reviews for `product`, newest first.
    #[must_use]
    pub fn list(&self, product: ProductId) -> Vec<Review> {
        self.load(&key(product))
    }

    /// Mean star rating for `product`, or `None` without reviews.
    #[must_use]
    pub fn average_rating(&self, product: ProductId) -> Option<f32> {
        let reviews = self.list(product);

        if reviews.is_empty() {
            return None;
        }

        let sum: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();

        #[expect(
            clippy::cast_precision_loss,
            reason = "Review counts and rating sums stay far below f32 precision limits"
        )]
        Some(sum as f32 / reviews.len() as f32)
    }

    fn load(&self, key: &str) -> Vec<Review> {
        self.store
            .get_item(key)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }
}
