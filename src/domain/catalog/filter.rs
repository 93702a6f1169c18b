//! Product filtering.

use crate::domain::catalog::models::Product;

/// Pure, AND-combined filter criteria over the catalog.
///
/// Unset criteria always match; results preserve catalog order. URL query
/// parameters (`?search=`, `?category=`) map onto the corresponding fields.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Case-insensitive text search over name, brand and category.
    pub search: Option<String>,

    /// Exact category match.
    pub category: Option<String>,

    /// Exact brand match.
    pub brand: Option<String>,

    /// Inclusive minimum price, minor units.
    pub min_price: Option<u64>,

    /// Inclusive maximum price, minor units.
    pub max_price: Option<u64>,

    /// Minimum average rating.
    pub min_rating: Option<f32>,
}

impl ProductFilter {
    /// Filter matching every product.
    #[must_use]
    pub fn any() -> Self {
        Self::default()
    }

    /// Restricts to products whose name, brand or category contains `text`.
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Restricts to a category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Restricts to a brand.
    #[must_use]
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    /// Restricts to an inclusive price range, minor units.
    #[must_use]
    pub fn price_range(mut self, min: u64, max: u64) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    /// Restricts to products rated at least `floor`.
    #[must_use]
    pub fn rating_floor(mut self, floor: f32) -> Self {
        self.min_rating = Some(floor);
        self
    }

    /// Whether `product` satisfies every set criterion.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            let haystack = [&product.name, &product.brand, &product.category];

            if !haystack
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }

        if let Some(brand) = &self.brand {
            if &product.brand != brand {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }

        if let Some(floor) = self.min_rating {
            if product.rating < floor {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::catalog::{Catalog, ProductId};

    use super::*;

    #[test]
    fn criteria_are_and_combined_and_order_preserving() -> TestResult {
        let catalog = Catalog::demo()?;

        let hits = catalog.filter(
            &ProductFilter::any()
                .category("Audio")
                .price_range(0, 250_000),
        );

        assert!(!hits.is_empty(), "demo catalog should have cheap audio");
        assert!(
            hits.iter()
                .all(|p| p.category == "Audio" && p.price <= 250_000),
            "every hit must satisfy every criterion"
        );

        // Catalog order is preserved.
        let ids: Vec<ProductId> = hits.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted, "demo catalog ids ascend in catalog order");

        Ok(())
    }

    #[test]
    fn search_is_case_insensitive() -> TestResult {
        let catalog = Catalog::demo()?;

        let by_brand = catalog.filter(&ProductFilter::any().search("sony"));
        assert!(by_brand.iter().any(|p| p.brand == "Sony"));

        Ok(())
    }

    #[test]
    fn empty_result_is_not_an_error() -> TestResult {
        let catalog = Catalog::demo()?;

        let hits = catalog.filter(&ProductFilter::any().brand("NoSuchBrand"));

        assert!(hits.is_empty());

        Ok(())
    }

    #[test]
    fn rating_floor_excludes_lower_rated() -> TestResult {
        let catalog = Catalog::demo()?;

        let hits = catalog.filter(&ProductFilter::any().rating_floor(4.5));

        assert!(hits.iter().all(|p| p.rating >= 4.5));

        Ok(())
    }
}
