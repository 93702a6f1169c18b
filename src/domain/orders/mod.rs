//! Orders
//!
//! Immutable order snapshots created at checkout, plus the forward-only
//! fulfillment status machine.

mod models;
mod status;

pub use models::{Order, OrderUuid, StatusChange};
pub use status::{OrderStatus, OrderStatusError, PROGRESSION};
