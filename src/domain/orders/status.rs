//! Order status machine.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fulfillment status of a placed order.
///
/// Progression is forward-only, one step at a time:
/// `pending → confirmed → processing → shipped → out_for_delivery →
/// delivered`. `cancelled` is reachable from any non-terminal state as an
/// alternate terminal. There are no backward transitions, and `delivered`
/// and `cancelled` accept none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Placed, awaiting confirmation.
    Pending,
    /// Confirmed by the store.
    Confirmed,
    /// Being prepared.
    Processing,
    /// Handed to the carrier.
    Shipped,
    /// On the delivery vehicle.
    OutForDelivery,
    /// Delivered; terminal.
    Delivered,
    /// Cancelled; terminal.
    Cancelled,
}

/// The forward progression, in order. `Cancelled` sits outside it.
pub const PROGRESSION: [OrderStatus; 6] = [
    OrderStatus::Pending,
    OrderStatus::Confirmed,
    OrderStatus::Processing,
    OrderStatus::Shipped,
    OrderStatus::OutForDelivery,
    OrderStatus::Delivered,
];

impl OrderStatus {
    /// Whether this status accepts no further transitions.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Delivered | Self::Cancelled)
    }

    fn progression_index(self) -> Option<usize> {
        PROGRESSION.iter().position(|status| *status == self)
    }

    /// Whether moving from `self` to `next` is a legal transition.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        if self.is_terminal() || next == self {
            return false;
        }

        if next == Self::Cancelled {
            return true;
        }

        match (self.progression_index(), next.progression_index()) {
            (Some(from), Some(to)) => to == from + 1,
            _ => false,
        }
    }

    /// The next status on the forward progression, if any.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        let at = self.progression_index()?;

        PROGRESSION.get(at + 1).copied()
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let label = match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        };

        f.write_str(label)
    }
}

/// Rejected status transition.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("order status cannot move from {from} to {to}")]
pub struct OrderStatusError {
    /// Status the order was in.
    pub from: OrderStatus,
    /// Status that was requested.
    pub to: OrderStatus,
}
