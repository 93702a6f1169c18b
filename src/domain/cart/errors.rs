//! Cart errors.

use thiserror::Error;

use crate::domain::catalog::ProductId;

/// Errors surfaced around cart edits.
///
/// The engine itself never rejects on stock; [`CartError::QuantityExceedsStock`]
/// comes from the caller-side stock check run before add/update.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// The requested quantity exceeds available stock.
    #[error("requested {requested} units of product {id}, only {available} in stock")]
    QuantityExceedsStock {
        /// Product being edited.
        id: ProductId,
        /// Units the edit would put in the cart.
        requested: u32,
        /// Units available.
        available: u32,
    },
}
