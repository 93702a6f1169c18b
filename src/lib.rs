//! Velvet Cart
//!
//! Velvet Cart is the storefront core for a premium electronics shop: catalog,
//! session cart, deterministic pricing, checkout with an order status machine,
//! wishlist, and shopper-local caches. External systems (identity, document
//! store, browser-local storage) sit behind collaborator traits in
//! [`auth`] and [`remote`].

pub mod auth;
pub mod context;
pub mod domain;
pub mod notify;
pub mod remote;
pub mod uuids;
