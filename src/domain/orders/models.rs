//! Order Models

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        cart::CartLine,
        checkout::{PaymentKind, ShippingDetails},
        orders::status::{OrderStatus, OrderStatusError},
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<Order>;

/// One recorded status change, for the tracking timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Status entered.
    pub status: OrderStatus,

    /// When it was entered.
    pub at: Timestamp,
}

/// Immutable snapshot created at checkout.
///
/// Line snapshots and the frozen pricing breakdown never change after
/// placement; later catalog price changes must not retroactively alter a
/// placed order. Only the fulfillment status advances, through
/// [`Order::advance_to`] and [`Order::cancel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub uuid: OrderUuid,

    /// Cart lines as they were at checkout.
    pub items: Vec<CartLine>,

    /// Frozen subtotal, minor units.
    pub subtotal: u64,

    /// Frozen shipping fee, minor units.
    pub shipping: u64,

    /// Frozen tax amount, minor units.
    pub tax: u64,

    /// Frozen grand total, minor units.
    pub grand_total: u64,

    /// How the order is being paid. Card details are validated at checkout
    /// but never stored.
    pub payment_method: PaymentKind,

    /// Shipping address as submitted.
    pub shipping_address: ShippingDetails,

    /// Current fulfillment status.
    pub status: OrderStatus,

    /// When the order was placed.
    pub placed_at: Timestamp,

    /// Status history, oldest first. Starts with `pending` at `placed_at`.
    pub timeline: Vec<StatusChange>,
}

impl Order {
    /// Moves the order to `next`, recording the change in the timeline.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStatusError`] when the transition is illegal.
    pub fn advance_to(&mut self, next: OrderStatus, at: Timestamp) -> Result<(), OrderStatusError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderStatusError {
                from: self.status,
                to: next,
            });
        }

        self.status = next;
        self.timeline.push(StatusChange { status: next, at });

        Ok(())
    }

    /// Cancels the order, if it is not already terminal.
    ///
    /// # Errors
    ///
    /// Returns [`OrderStatusError`] when the order is already delivered or
    /// cancelled.
    pub fn cancel(&mut self, at: Timestamp) -> Result<(), OrderStatusError> {
        self.advance_to(OrderStatus::Cancelled, at)
    }
}
