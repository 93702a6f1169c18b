//! Wishlist
//!
//! Per-account saved products, one entry per product id, synced to the
//! document store (`wishlists/{uid}`, array field `items`). Local state is
//! optimistic: a failed remote write is reported, never rolled back.

mod errors;
mod service;

pub use errors::WishlistError;
pub use service::WishlistService;

pub(crate) const WISHLISTS_COLLECTION: &str = "wishlists";
pub(crate) const ITEMS_FIELD: &str = "items";
