//! Storefront Domain Concerns

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod orders;
pub mod pricing;
pub mod shopper;
pub mod wishlist;
