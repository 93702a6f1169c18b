//! Cart Models

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{Product, ProductId};

/// One cart line: a product snapshot taken at add-time plus a quantity.
///
/// Invariant: `quantity >= 1`. A line with quantity zero must not exist;
/// removal deletes the line instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product copy taken when the line was created. Later catalog changes
    /// never alter it.
    pub product: Product,

    /// Units of the product, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price of the line: unit price times quantity, minor units.
    #[must_use]
    pub fn line_total(&self) -> u64 {
        self.product.price * u64::from(self.quantity)
    }
}

/// What [`Cart::add`] did with the incoming product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line was appended.
    Added,

    /// An existing line's quantity was increased.
    QuantityUpdated,
}

/// Insertion-ordered cart with at most one line per product id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cart lines, in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `id`, if present.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product.id == id)
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity))
            .sum()
    }

    /// Adds `quantity` units of `product`, merging into an existing line
    /// for the same product id rather than creating a duplicate.
    ///
    /// Quantities below 1 are treated as 1. No stock check happens here;
    /// callers validate stock before adding.
    pub fn add(&mut self, product: &Product, quantity: u32) -> AddOutcome {
        let quantity = quantity.max(1);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity += quantity;
            return AddOutcome::QuantityUpdated;
        }

        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
        });

        AddOutcome::Added
    }

    /// Deletes the line for `id`. Returns whether a line was removed;
    /// absent lines are a no-op, not an error.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.product.id != id);

        self.lines.len() != before
    }

    /// Sets the quantity of the line for `id` to `max(1, quantity)`.
    ///
    /// Never deletes the line; explicit removal is a separate operation.
    /// Returns whether a line existed (no-op otherwise).
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        match self
            .lines
            .iter_mut()
            .find(|line| line.product.id == id)
        {
            Some(line) => {
                line.quantity = quantity.max(1);
                true
            }
            None => false,
        }
    }

    /// Empties the cart unconditionally.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, price: u64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            price,
            original_price: None,
            category: "Audio".to_owned(),
            brand: "Sony".to_owned(),
            rating: 4.0,
            reviews: 0,
            stock: 10,
            description: String::new(),
            features: Vec::new(),
            images: Vec::new(),
            is_new: false,
            is_on_sale: false,
            discount: None,
        }
    }

    #[test]
    fn repeated_adds_merge_into_one_line() {
        let mut cart = Cart::new();
        let p = product(1, 100);

        for _ in 0..5 {
            cart.add(&p, 1);
        }

        assert_eq!(cart.len(), 1, "merge-on-add must never duplicate lines");
        assert_eq!(cart.line(ProductId(1)).map(|l| l.quantity), Some(5));
    }

    #[test]
    fn first_add_reports_added_then_quantity_updated() {
        let mut cart = Cart::new();
        let p = product(1, 100);

        assert_eq!(cart.add(&p, 1), AddOutcome::Added);
        assert_eq!(cart.add(&p, 1), AddOutcome::QuantityUpdated);
    }

    #[test]
    fn update_quantity_clamps_to_one() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100), 3);

        assert!(cart.set_quantity(ProductId(1), 0));

        let line = cart.line(ProductId(1)).map(|l| l.quantity);
        assert_eq!(line, Some(1), "quantity 0 clamps to 1, never deletes");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn update_quantity_on_missing_line_is_a_no_op() {
        let mut cart = Cart::new();

        assert!(!cart.set_quantity(ProductId(9), 4));
        assert!(cart.is_empty());
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100), 1);

        assert!(cart.remove(ProductId(1)));
        assert!(!cart.remove(ProductId(1)), "second remove is a no-op");
        assert!(cart.is_empty());
    }

    #[test]
    fn lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product(2, 100), 1);
        cart.add(&product(1, 100), 1);
        cart.add(&product(2, 100), 1);

        let ids: Vec<u32> = cart.lines().iter().map(|l| l.product.id.0).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn snapshot_is_insulated_from_catalog_changes() {
        let mut cart = Cart::new();
        let mut p = product(1, 100);
        cart.add(&p, 1);

        p.price = 999;

        assert_eq!(cart.line(ProductId(1)).map(|l| l.product.price), Some(100));
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add(&product(1, 100), 2);
        cart.add(&product(2, 200), 1);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }
}
