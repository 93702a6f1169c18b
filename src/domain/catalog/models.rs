//! Product Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Stable product identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<u32> for ProductId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Product Model
///
/// All money fields are integer minor units of the store currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable identifier.
    pub id: ProductId,

    /// Display name.
    pub name: String,

    /// Unit price, minor units.
    pub price: u64,

    /// Pre-sale price, minor units.
    #[serde(default)]
    pub original_price: Option<u64>,

    /// Category label.
    pub category: String,

    /// Brand label.
    pub brand: String,

    /// Average rating, `0.0..=5.0`.
    pub rating: f32,

    /// Review count.
    #[serde(default)]
    pub reviews: u32,

    /// Units available.
    pub stock: u32,

    /// Descriptive copy.
    #[serde(default)]
    pub description: String,

    /// Feature bullet points.
    #[serde(default)]
    pub features: Vec<String>,

    /// Image URLs.
    #[serde(default)]
    pub images: Vec<String>,

    /// New-arrival badge.
    #[serde(default)]
    pub is_new: bool,

    /// On-sale badge.
    #[serde(default)]
    pub is_on_sale: bool,

    /// Discount percentage shown on the sale badge.
    #[serde(default)]
    pub discount: Option<u8>,
}

impl Product {
    /// Whether `quantity` units can currently be fulfilled from stock.
    ///
    /// Stock is advisory: the cart engine itself never rejects on it, the
    /// caller checks before adding or editing quantities.
    #[must_use]
    pub fn in_stock(&self, quantity: u32) -> bool {
        quantity <= self.stock
    }
}
