//! Wishlist service.

use std::sync::Arc;

use tracing::warn;

use crate::{
    auth::AccountUuid,
    domain::{
        catalog::{Product, ProductId},
        wishlist::{ITEMS_FIELD, WISHLISTS_COLLECTION, errors::WishlistError},
    },
    notify::Notifier,
    remote::DocumentStore,
};

/// Session wishlist bound to the signed-in account.
///
/// Holds the in-memory entry list (insertion-ordered, unique per product
/// id) and mirrors edits to the document store. Remote failures are
/// surfaced to the caller but the optimistic local change stands.
pub struct WishlistService {
    store: Arc<dyn DocumentStore>,
    notifier: Arc<dyn Notifier>,
    account: Option<AccountUuid>,
    entries: Vec<Product>,
}

impl std::fmt::Debug for WishlistService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WishlistService")
            .field("account", &self.account)
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl WishlistService {
    /// Creates an unbound (signed-out) wishlist.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            account: None,
            entries: Vec::new(),
        }
    }

    /// Binds to a signed-in account and hydrates entries from the store.
    ///
    /// A failed or absent remote document hydrates as empty rather than
    /// failing sign-in.
    pub async fn bind(&mut self, account: AccountUuid) {
        self.account = Some(account);
        self.entries.clear();

        let document = match self
            .store
            .get_document(WISHLISTS_COLLECTION, &account.to_string())
            .await
        {
            Ok(document) => document,
            Err(error) => {
                warn!(%error, account = %account, "wishlist hydration failed");
                return;
            }
        };

        let Some(items) = document.as_ref().and_then(|doc| doc.get(ITEMS_FIELD)) else {
            return;
        };

        match serde_json::from_value::<Vec<Product>>(items.clone()) {
            Ok(products) => self.entries = products,
            Err(error) => warn!(%error, account = %account, "malformed wishlist document"),
        }
    }

    /// Unbinds on sign-out, clearing local entries.
    pub fn unbind(&mut self) {
        self.account = None;
        self.entries.clear();
    }

    /// Saved products, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    /// Whether `id` is saved.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    /// Saves a product. No-op when already present.
    ///
    /// # Errors
    ///
    /// - [`WishlistError::NotSignedIn`] without a bound account.
    /// - [`WishlistError::Sync`] when the remote union fails; the local
    ///   entry has already been applied and stands.
    pub async fn add(&mut self, product: &Product) -> Result<(), WishlistError> {
        let Some(account) = self.account else {
            self.notifier.error("Please login to add items to wishlist");
            return Err(WishlistError::NotSignedIn);
        };

        if self.contains(product.id) {
            self.notifier.error("Product already in wishlist");
            return Ok(());
        }

        self.entries.push(product.clone());

        let payload = match serde_json::to_value(product) {
            Ok(payload) => payload,
            Err(error) => {
                // Product records always encode; treat a failure like a
                // remote rejection so the local entry still stands.
                warn!(%error, product = %product.id, "wishlist entry encoding failed");
                self.notifier.error("Added to wishlist, sync pending");
                return Err(crate::remote::RemoteSyncError::Rejected(error.to_string()).into());
            }
        };

        match self
            .store
            .array_union(
                WISHLISTS_COLLECTION,
                &account.to_string(),
                ITEMS_FIELD,
                vec![payload],
            )
            .await
        {
            Ok(()) => {
                self.notifier.success("Added to wishlist!");
                Ok(())
            }
            Err(error) => {
                warn!(%error, account = %account, product = %product.id, "wishlist sync failed");
                self.notifier.error("Added to wishlist, sync pending");
                Err(error.into())
            }
        }
    }

    /// Removes a saved product. No-op when absent or signed out.
    ///
    /// # Errors
    ///
    /// Returns [`WishlistError::Sync`] when the remote removal fails; the
    /// local removal has already been applied and stands.
    pub async fn remove(&mut self, id: ProductId) -> Result<(), WishlistError> {
        let Some(account) = self.account else {
            return Ok(());
        };

        let Some(at) = self.entries.iter().position(|entry| entry.id == id) else {
            return Ok(());
        };

        let removed = self.entries.remove(at);

        let payload = match serde_json::to_value(&removed) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, product = %id, "wishlist entry encoding failed");
                self.notifier.error("Removed from wishlist, sync pending");
                return Err(crate::remote::RemoteSyncError::Rejected(error.to_string()).into());
            }
        };

        match self
            .store
            .array_remove(
                WISHLISTS_COLLECTION,
                &account.to_string(),
                ITEMS_FIELD,
                vec![payload],
            )
            .await
        {
            Ok(()) => {
                self.notifier.success("Removed from wishlist");
                Ok(())
            }
            Err(error) => {
                warn!(%error, account = %account, product = %id, "wishlist sync failed");
                self.notifier.error("Removed from wishlist, sync pending");
                Err(error.into())
            }
        }
    }
}
