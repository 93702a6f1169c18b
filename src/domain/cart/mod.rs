//! Cart Engine
//!
//! The session cart: an insertion-ordered collection of lines keyed by
//! product id, with merge-on-add semantics. All mutations are synchronous
//! and immediately visible to the pricing calculator.

mod errors;
mod models;
mod service;

pub use errors::CartError;
pub use models::{AddOutcome, Cart, CartLine};
pub use service::CartService;
