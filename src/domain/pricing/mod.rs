//! Pricing Calculator
//!
//! Pure functions over a cart. All money is integer minor units; the only
//! non-integer step is the tax rate multiplication, which rounds half-up to
//! the nearest minor unit so that `grand_total = subtotal + shipping + tax`
//! holds exactly.

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::{Deserialize, Serialize};

use crate::domain::cart::Cart;

/// Default free-shipping threshold, minor units.
pub const FREE_SHIPPING_THRESHOLD: u64 = 500_000;

/// Default flat shipping fee, minor units.
pub const FLAT_SHIPPING_FEE: u64 = 29_900;

/// Default tax rate.
pub const TAX_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Shipping and tax configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    /// Subtotals strictly above this ship free, minor units.
    pub free_shipping_threshold: u64,

    /// Fee charged below the threshold, minor units.
    pub flat_shipping_fee: u64,

    /// Tax rate applied to the subtotal (e.g. `0.18`).
    pub tax_rate: Decimal,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            free_shipping_threshold: FREE_SHIPPING_THRESHOLD,
            flat_shipping_fee: FLAT_SHIPPING_FEE,
            tax_rate: TAX_RATE,
        }
    }
}

/// Derived totals of a cart. Never stored; recomputed from the live cart
/// on demand so it cannot go stale, and frozen into the order at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// Sum of line totals, minor units.
    pub subtotal: u64,

    /// Shipping fee, minor units.
    pub shipping: u64,

    /// Tax amount, minor units, rounded half-up.
    pub tax: u64,

    /// `subtotal + shipping + tax`, exactly.
    pub grand_total: u64,
}

impl PricingBreakdown {
    /// Computes the breakdown of `cart` under `config`.
    #[must_use]
    pub fn compute(cart: &Cart, config: &PricingConfig) -> Self {
        let subtotal = subtotal(cart);
        let shipping = shipping(subtotal, config);
        let tax = tax(subtotal, config);

        Self {
            subtotal,
            shipping,
            tax,
            grand_total: subtotal + shipping + tax,
        }
    }
}

/// Sum of `price × quantity` over all lines, minor units.
#[must_use]
pub fn subtotal(cart: &Cart) -> u64 {
    cart.lines().iter().map(super::cart::CartLine::line_total).sum()
}

/// Free above the threshold (strict `>`), flat fee otherwise.
#[must_use]
pub fn shipping(subtotal: u64, config: &PricingConfig) -> u64 {
    if subtotal > config.free_shipping_threshold {
        0
    } else {
        config.flat_shipping_fee
    }
}

/// `subtotal × tax_rate`, rounded half-up to the nearest minor unit.
///
/// Negative rates are not representable in a valid config; the conversion
/// back to minor units therefore cannot fail and saturates at zero.
#[must_use]
pub fn tax(subtotal: u64, config: &PricingConfig) -> u64 {
    (Decimal::from(subtotal) * config.tax_rate)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or_default()
}
