//! Cart service.

use std::sync::Arc;

use tracing::debug;

use crate::{
    domain::{
        cart::{
            errors::CartError,
            models::{AddOutcome, Cart, CartLine},
        },
        catalog::{Product, ProductId},
        pricing::{PricingBreakdown, PricingConfig},
    },
    notify::Notifier,
};

/// Session-scoped cart engine.
///
/// One shared instance per session, handed to the UI by constructor
/// injection. Owns the [`Cart`] and reports every mutation through the
/// injected [`Notifier`]; pricing is recomputed from the live cart on
/// demand and never cached.
pub struct CartService {
    cart: Cart,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for CartService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartService")
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

impl CartService {
    /// Creates a service with an empty cart.
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            cart: Cart::new(),
            notifier,
        }
    }

    /// Read access to the live cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable access for the checkout transition, which clears the cart
    /// after a successful order.
    pub(crate) fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Checks whether adding `additional` units of `product` would exceed
    /// stock, counting units already in the cart.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityExceedsStock`] when it would.
    pub fn stock_check(&self, product: &Product, additional: u32) -> Result<(), CartError> {
        let in_cart = self
            .cart
            .line(product.id)
            .map_or(0, |line| line.quantity);
        let requested = in_cart + additional;

        if product.in_stock(requested) {
            Ok(())
        } else {
            Err(CartError::QuantityExceedsStock {
                id: product.id,
                requested,
                available: product.stock,
            })
        }
    }

    /// Adds `quantity` units of `product`, merging into any existing line.
    pub fn add_to_cart(&mut self, product: &Product, quantity: u32) -> AddOutcome {
        let outcome = self.cart.add(product, quantity);

        debug!(product_id = %product.id, ?outcome, "cart add");

        match outcome {
            AddOutcome::Added => self.notifier.success("Item added to cart!"),
            AddOutcome::QuantityUpdated => self.notifier.success("Quantity updated in cart"),
        }

        outcome
    }

    /// Deletes the line for `id`; absent lines are a silent no-op.
    pub fn remove_from_cart(&mut self, id: ProductId) {
        if self.cart.remove(id) {
            debug!(product_id = %id, "cart remove");
            self.notifier.error("Item removed from cart");
        }
    }

    /// Sets the line quantity to `max(1, quantity)`; no-op on missing line.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) {
        if self.cart.set_quantity(id, quantity) {
            debug!(product_id = %id, quantity = quantity.max(1), "cart quantity update");
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.notifier.success("Cart cleared!");
    }

    /// Current pricing breakdown of the live cart.
    #[must_use]
    pub fn pricing(&self, config: &PricingConfig) -> PricingBreakdown {
        PricingBreakdown::compute(&self.cart, config)
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }
}

#[cfg(test)]
mod tests {
    use crate::notify::MockNotifier;

    use super::*;

    fn product(id: u32, price: u64, stock: u32) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            price,
            original_price: None,
            category: "Audio".to_owned(),
            brand: "Sony".to_owned(),
            rating: 4.0,
            reviews: 0,
            stock,
            description: String::new(),
            features: Vec::new(),
            images: Vec::new(),
            is_new: false,
            is_on_sale: false,
            discount: None,
        }
    }

    fn quiet_service() -> CartService {
        let mut notifier = MockNotifier::new();
        notifier.expect_success().return_const(());
        notifier.expect_error().return_const(());

        CartService::new(Arc::new(notifier))
    }

    #[test]
    fn add_notifies_item_added_then_quantity_updated() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_success()
            .withf(|msg| msg == "Item added to cart!")
            .once()
            .return_const(());
        notifier
            .expect_success()
            .withf(|msg| msg == "Quantity updated in cart")
            .once()
            .return_const(());

        let mut service = CartService::new(Arc::new(notifier));
        let p = product(1, 100, 10);

        service.add_to_cart(&p, 1);
        service.add_to_cart(&p, 1);

        assert_eq!(service.cart().total_quantity(), 2);
    }

    #[test]
    fn stock_check_counts_units_already_in_cart() {
        let mut service = quiet_service();
        let p = product(1, 100, 3);

        service.add_to_cart(&p, 2);

        assert_eq!(service.stock_check(&p, 1), Ok(()));
        assert_eq!(
            service.stock_check(&p, 2),
            Err(CartError::QuantityExceedsStock {
                id: ProductId(1),
                requested: 4,
                available: 3,
            })
        );
    }

    #[test]
    fn remove_of_absent_line_stays_silent() {
        let mut notifier = MockNotifier::new();
        notifier.expect_error().never();

        let mut service = CartService::new(Arc::new(notifier));

        service.remove_from_cart(ProductId(42));
    }

    #[test]
    fn pricing_reflects_live_cart() {
        let mut service = quiet_service();
        let config = PricingConfig::default();

        service.add_to_cart(&product(1, 100_000, 10), 2);
        let before = service.pricing(&config);

        service.update_quantity(ProductId(1), 3);
        let after = service.pricing(&config);

        assert_eq!(before.subtotal, 200_000);
        assert_eq!(after.subtotal, 300_000, "pricing must never go stale");
    }
}
