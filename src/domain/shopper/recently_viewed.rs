//! Recently viewed products.

use std::sync::Arc;

use crate::{
    auth::AccountUuid,
    domain::catalog::Product,
    remote::{LocalStore, LocalStoreError},
};

/// Most recent entries kept per key.
const CAP: usize = 8;

const GUEST_KEY: &str = "recentlyViewed_guest";

/// Most-recent-first, deduplicated product history, keyed per account
/// (guests share one key).
pub struct RecentlyViewed {
    store: Arc<dyn LocalStore>,
}

impl std::fmt::Debug for RecentlyViewed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecentlyViewed").finish_non_exhaustive()
    }
}

fn key(account: Option<AccountUuid>) -> String {
    account.map_or_else(|| GUEST_KEY.to_owned(), |uuid| format!("recentlyViewed_{uuid}"))
}

impl RecentlyViewed {
    /// Creates the cache over the local store.
    #[must_use]
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self { store }
    }

    /// Records a product view: moves it to the front, dropping any older
    /// occurrence, and keeps at most eight entries.
    ///
    /// # Errors
    ///
    /// Returns [`LocalStoreError`] when the write fails; the stored list is
    /// then simply left as it was.
    pub fn record(
        &self,
        account: Option<AccountUuid>,
        product: &Product,
    ) -> Result<(), LocalStoreError> {
        let key = key(account);

        let mut entries = self.load(&key);
        entries.retain(|entry| entry.id != product.id);
        entries.insert(0, product.clone());
        entries.truncate(CAP);

        let value = serde_json::to_value(&entries).map_err(|error| LocalStoreError::Write {
            key: key.clone(),
            reason: error.to_string(),
        })?;

        self.store.set_item(&key, value)
    }

    /// The history for `account`, most recent first.
    #[must_use]
    pub fn list(&self, account: Option<AccountUuid>) -> Vec<Product> {
        self.load(&key(account))
    }

    /// Clears the history for `account`.
    pub fn clear(&self, account: Option<AccountUuid>) {
        self.store.remove_item(&key(account));
    }

    fn load(&self, key: &str) -> Vec<Product> {
        self.store
            .get_item(key)
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default()
    }
}
