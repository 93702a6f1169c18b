//! Price alerts.

use std::sync::Arc;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    domain::catalog::{Catalog, ProductId},
    remote::{LocalStore, LocalStoreError},
};

const KEY: &str = "priceAlerts";

/// A standing request to be told when a product drops to a target price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceAlert {
    /// The watched product.
    pub product_id: ProductId,

    /// Product name at the time the alert was set.
    pub product_name: String,

    /// Price, in minor units, at or below which the alert fires.
    pub target_price: u64,

    /// When the alert was created.
    pub created_at: Timestamp,
}

/// Locally stored price alerts, one per product.
pub struct PriceAlerts {
    store: Arc<dyn LocalStore>,
}

impl std::fmt::Debug for PriceAlerts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriceAlerts").finish_non_exhaustive()
    }
}

impl PriceAlerts {
    /// Creates the alert list over the local store.
    #[must_use]
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// Sets an alert for a product, replacing any existing one for the
    /// same product id.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStoreError`] when persisting fails.
    pub fn set(&self, alert: PriceAlert) -> Result<(), LocalStoreError> {
        let mut alerts = self.list();
        alerts.retain(|existing| existing.product_id != alert.product_id);
        alerts.push(alert);

        self.persist(&alerts)
    }

    /// Drops the alert for `id`; absent ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStoreError`] when persisting fails.
    pub fn remove(&self, id: ProductId) -> Result<(), LocalStoreError> {
        let mut alerts = self.list();
        let before = alerts.len();
        alerts.retain(|existing| existing.product_id != id);

        if alerts.len() != before {
            self.persist(&alerts)?;
        }

        Ok(())
    }

    /// All alerts, in the order they were set.
    #[must_use]
    pub fn list(&self) -> Vec<PriceAlert> {
        self.store
            .get_item(KEY)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }

    /// Alerts whose product's current catalog price is at or below the
    /// target. Alerts for products no longer in the catalog never fire.
    #[must_use]
    pub fn triggered(&self, catalog: &Catalog) -> Vec<PriceAlert> {
        self.list()
            .into_iter()
            .filter(|alert| {
                catalog
                    .find_by_id(alert.product_id)
                    .is_some_and(|product| product.price <= alert.target_price)
            })
            .collect()
    }

    fn persist(&self, alerts: &[PriceAlert]) -> Result<(), LocalStoreError> {
        let value = serde_json::to_value(alerts).map_err(|error| LocalStoreError::Write {
            key: KEY.to_owned(),
            reason: error.to_string(),
        })?;

        self.store.set_item(KEY, value)
    }
}
