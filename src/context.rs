//! Storefront Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AccountsService, AccountUuid, AuthProvider},
    domain::{
        cart::CartService,
        catalog::{Catalog, CatalogError},
        checkout::{
            CheckoutError, CheckoutService, PaymentMethod, PlacedOrder, ShippingDetails,
        },
        pricing::PricingConfig,
        shopper::{ComparisonSet, PriceAlerts, RecentlyViewed, Reviews},
        wishlist::WishlistService,
    },
    notify::Notifier,
    remote::{DocumentStore, LocalStore},
};

#[derive(Debug, Error)]
pub enum ContextInitError {
    #[error("failed to load the product catalog")]
    Catalog(#[from] CatalogError),
}

/// One shopping session's services, wired over shared collaborators.
///
/// Cart and wishlist carry per-session state and are owned here; the
/// stores, auth provider, and notifier are shared handles.
pub struct StorefrontContext {
    pub catalog: Catalog,
    pub cart: CartService,
    pub checkout: CheckoutService,
    pub accounts: AccountsService,
    pub wishlist: WishlistService,
    pub recently_viewed: RecentlyViewed,
    pub comparison: ComparisonSet,
    pub price_alerts: PriceAlerts,
    pub reviews: Reviews,
}

impl std::fmt::Debug for StorefrontContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontContext")
            .field("catalog", &self.catalog.products().len())
            .finish_non_exhaustive()
    }
}

impl StorefrontContext {
    /// Wires a session from its collaborators and a catalog.
    #[must_use]
    pub fn new(
        catalog: Catalog,
        provider: Arc<dyn AuthProvider>,
        documents: Arc<dyn DocumentStore>,
        local: Arc<dyn LocalStore>,
        notifier: Arc<dyn Notifier>,
        pricing: PricingConfig,
    ) -> Self {
        Self {
            catalog,
            cart: CartService::new(notifier.clone()),
            checkout: CheckoutService::new(documents.clone(), notifier.clone(), pricing),
            accounts: AccountsService::new(provider, documents.clone(), notifier.clone()),
            wishlist: WishlistService::new(documents, notifier),
            recently_viewed: RecentlyViewed::new(local.clone()),
            comparison: ComparisonSet::new(local.clone()),
            price_alerts: PriceAlerts::new(local.clone()),
            reviews: Reviews::new(local),
        }
    }

    /// Wires a session over the bundled demo catalog and default pricing.
    ///
    /// # Errors
    ///
    /// Returns an error when the demo catalog fails validation.
    pub fn demo(
        provider: Arc<dyn AuthProvider>,
        documents: Arc<dyn DocumentStore>,
        local: Arc<dyn LocalStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, ContextInitError> {
        let catalog = Catalog::demo()?;

        Ok(Self::new(
            catalog,
            provider,
            documents,
            local,
            notifier,
            PricingConfig::default(),
        ))
    }

    /// Places an order from the session cart, clearing it on success.
    ///
    /// # Errors
    ///
    /// See [`CheckoutService::place_order`].
    pub async fn place_order(
        &mut self,
        account: AccountUuid,
        shipping: &ShippingDetails,
        payment: &PaymentMethod,
    ) -> Result<PlacedOrder, CheckoutError> {
        self.checkout
            .place_order(account, self.cart.cart_mut(), shipping, payment)
            .await
    }
}
