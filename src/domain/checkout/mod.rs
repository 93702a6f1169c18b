//! Checkout
//!
//! Validates the shipping and payment forms, freezes the pricing breakdown,
//! and converts the cart into an immutable order. Validation is atomic:
//! on any failure the cart is untouched and no order exists.

mod errors;
mod forms;
mod service;

pub use errors::CheckoutError;
pub use forms::{CardDetails, PaymentKind, PaymentMethod, ShippingDetails};
pub use service::{CheckoutService, PlacedOrder};

/// Collection holding one profile document per account; order history is
/// an array field on it.
pub(crate) const USERS_COLLECTION: &str = "users";

/// Array field of the profile document that accumulates placed orders.
pub(crate) const ORDERS_FIELD: &str = "orders";
