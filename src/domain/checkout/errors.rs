//! Checkout errors.

use thiserror::Error;

/// Validation failures that block order creation entirely.
///
/// When any of these is returned the cart is untouched and no order was
/// created.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Checkout was attempted with an empty cart.
    #[error("your cart is empty")]
    EmptyCart,

    /// A required shipping field is blank; carries the field name.
    #[error("please fill in {0}")]
    MissingField(&'static str),

    /// A card payment is missing card number, expiry or CVV.
    #[error("please fill in all card details")]
    MissingPaymentDetail,

    /// The order could not be encoded for the document store.
    #[error("failed to encode order for storage")]
    Encode(#[from] serde_json::Error),
}
