//! Checkout service.

use std::sync::Arc;

use jiff::Timestamp;
use tracing::{Span, warn};

use crate::{
    auth::AccountUuid,
    domain::{
        cart::Cart,
        checkout::{
            ORDERS_FIELD, USERS_COLLECTION,
            errors::CheckoutError,
            forms::{PaymentMethod, ShippingDetails},
        },
        orders::{Order, OrderStatus, OrderUuid, StatusChange},
        pricing::{PricingBreakdown, PricingConfig},
    },
    notify::Notifier,
};

/// Outcome of a successful checkout.
#[derive(Debug)]
pub struct PlacedOrder {
    /// The immutable order snapshot.
    pub order: Order,

    /// Whether the remote order-history append failed and should be
    /// retried. The order itself exists either way.
    pub sync_pending: bool,
}

/// Converts a priced cart into an immutable order.
pub struct CheckoutService {
    store: Arc<dyn crate::remote::DocumentStore>,
    notifier: Arc<dyn Notifier>,
    config: PricingConfig,
}

impl std::fmt::Debug for CheckoutService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckoutService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CheckoutService {
    /// Creates a service writing order history through `store`.
    #[must_use]
    pub fn new(
        store: Arc<dyn crate::remote::DocumentStore>,
        notifier: Arc<dyn Notifier>,
        config: PricingConfig,
    ) -> Self {
        Self {
            store,
            notifier,
            config,
        }
    }

    /// The pricing configuration checkout freezes into orders.
    #[must_use]
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Places an order from `cart`.
    ///
    /// Validation runs first and is all-or-nothing: on failure the cart is
    /// untouched and no order exists. On success the breakdown is frozen at
    /// this instant, the order (status `pending`) is appended to the
    /// account's order history, the cart is cleared, and the order is
    /// returned. A failed history append does not unwind anything; it is
    /// reported through the notifier and the `sync_pending` flag.
    ///
    /// Callers must prevent duplicate submission while this is in flight.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::EmptyCart`] when the cart has no lines.
    /// - [`CheckoutError::MissingField`] naming the first blank shipping field.
    /// - [`CheckoutError::MissingPaymentDetail`] for incomplete card details.
    #[tracing::instrument(
        name = "checkout.place_order",
        skip(self, cart, shipping, payment),
        fields(
            account = %account,
            order_uuid = tracing::field::Empty,
            grand_total = tracing::field::Empty,
            sync_pending = tracing::field::Empty
        ),
        err
    )]
    pub async fn place_order(
        &self,
        account: AccountUuid,
        cart: &mut Cart,
        shipping: &ShippingDetails,
        payment: &PaymentMethod,
    ) -> Result<PlacedOrder, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        if let Some(field) = shipping.missing_field() {
            return Err(CheckoutError::MissingField(field));
        }

        if payment.missing_detail() {
            return Err(CheckoutError::MissingPaymentDetail);
        }

        let breakdown = PricingBreakdown::compute(cart, &self.config);
        let placed_at = Timestamp::now();

        let order = Order {
            uuid: OrderUuid::generate(),
            items: cart.lines().to_vec(),
            subtotal: breakdown.subtotal,
            shipping: breakdown.shipping,
            tax: breakdown.tax,
            grand_total: breakdown.grand_total,
            payment_method: payment.kind(),
            shipping_address: shipping.clone(),
            status: OrderStatus::Pending,
            placed_at,
            timeline: vec![StatusChange {
                status: OrderStatus::Pending,
                at: placed_at,
            }],
        };

        // Encoding precedes any state change so a failure stays atomic.
        let payload = serde_json::to_value(&order)?;

        let span = Span::current();
        span.record("order_uuid", tracing::field::display(order.uuid));
        span.record("grand_total", order.grand_total);

        let sync = self
            .store
            .array_union(
                USERS_COLLECTION,
                &account.to_string(),
                ORDERS_FIELD,
                vec![payload],
            )
            .await;

        cart.clear();

        let sync_pending = match sync {
            Ok(()) => {
                self.notifier.success("Order placed successfully!");
                false
            }
            Err(error) => {
                warn!(%error, order_uuid = %order.uuid, "order history append failed");
                self.notifier
                    .error("Order placed, saved locally, sync pending");
                true
            }
        };

        span.record("sync_pending", sync_pending);

        Ok(PlacedOrder {
            order,
            sync_pending,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        domain::catalog::{Product, ProductId},
        notify::MockNotifier,
        remote::{DocumentStore, MemoryDocumentStore, MockDocumentStore, RemoteSyncError},
    };

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

    fn shipping() -> ShippingDetails {
        ShippingDetails {
            first_name: "Asha".to_owned(),
            last_name: "Verma".to_owned(),
            email: "asha@example.com".to_owned(),
            phone: "9876543210".to_owned(),
            address: "12 MG Road".to_owned(),
            city: "Pune".to_owned(),
            state: "Maharashtra".to_owned(),
            pincode: "411001".to_owned(),
        }
    }

    fn quiet_notifier() -> Arc<MockNotifier> {
        let mut notifier = MockNotifier::new();
        notifier.expect_success().return_const(());
        notifier.expect_error().return_const(());

        Arc::new(notifier)
    }

    fn two_item_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(&product(1, 100_000), 1);
        cart.add(&product(2, 50_000), 2);

        cart
    }

    #[tokio::test]
    async fn empty_cart_is_rejected() {
        let service = CheckoutService::new(
            Arc::new(MemoryDocumentStore::new()),
            quiet_notifier(),
            PricingConfig::default(),
        );
        let mut cart = Cart::new();

        let result = service
            .place_order(
                AccountUuid::generate(),
                &mut cart,
                &shipping(),
                &PaymentMethod::CashOnDelivery,
            )
            .await;

        assert!(
            matches!(result, Err(CheckoutError::EmptyCart)),
            "expected EmptyCart, got {result:?}"
        );
    }

    #[tokio::test]
    async fn missing_city_blocks_checkout_and_keeps_cart() {
        let store = Arc::new(MemoryDocumentStore::new());
        let service =
            CheckoutService::new(store.clone(), quiet_notifier(), PricingConfig::default());

        let mut cart = two_item_cart();
        let mut form = shipping();
        form.city = String::new();

        let result = service
            .place_order(
                AccountUuid::generate(),
                &mut cart,
                &form,
                &PaymentMethod::CashOnDelivery,
            )
            .await;

        assert!(
            matches!(result, Err(CheckoutError::MissingField("city"))),
            "expected MissingField(city), got {result:?}"
        );
        assert_eq!(cart.len(), 2, "failed validation must not touch the cart");
    }

    #[tokio::test]
    async fn incomplete_card_blocks_checkout() {
        let service = CheckoutService::new(
            Arc::new(MemoryDocumentStore::new()),
            quiet_notifier(),
            PricingConfig::default(),
        );

        let mut cart = two_item_cart();
        let card = PaymentMethod::Card(crate::domain::checkout::CardDetails::default());

        let result = service
            .place_order(AccountUuid::generate(), &mut cart, &shipping(), &card)
            .await;

        assert!(
            matches!(result, Err(CheckoutError::MissingPaymentDetail)),
            "expected MissingPaymentDetail, got {result:?}"
        );
        assert_eq!(cart.len(), 2);
    }

    #[tokio::test]
    async fn successful_checkout_freezes_totals_and_clears_cart() -> testresult::TestResult {
        let store = Arc::new(MemoryDocumentStore::new());
        let service =
            CheckoutService::new(store.clone(), quiet_notifier(), PricingConfig::default());

        let account = AccountUuid::generate();
        let mut cart = two_item_cart();
        let lines_before = cart.lines().to_vec();

        let placed = service
            .place_order(account, &mut cart, &shipping(), &PaymentMethod::CashOnDelivery)
            .await?;

        assert!(!placed.sync_pending);
        assert_eq!(placed.order.items, lines_before);
        assert_eq!(placed.order.status, OrderStatus::Pending);
        assert_eq!(placed.order.subtotal, 200_000);
        assert_eq!(placed.order.shipping, 29_900, "below threshold pays the flat fee");
        assert_eq!(placed.order.tax, 36_000);
        assert_eq!(placed.order.grand_total, 265_900);
        assert!(cart.is_empty(), "checkout success must clear the cart");

        // The order landed in the account's history.
        let doc = store
            .get_document(USERS_COLLECTION, &account.to_string())
            .await?;
        let orders = doc
            .as_ref()
            .and_then(|d| d.get(ORDERS_FIELD))
            .and_then(|v| v.as_array())
            .map(Vec::len);
        assert_eq!(orders, Some(1));

        Ok(())
    }

    #[tokio::test]
    async fn failed_history_append_reports_sync_pending() -> testresult::TestResult {
        let mut store = MockDocumentStore::new();
        store
            .expect_array_union()
            .returning(|_, _, _, _| Err(RemoteSyncError::Unavailable));

        let service = CheckoutService::new(
            Arc::new(store),
            quiet_notifier(),
            PricingConfig::default(),
        );

        let mut cart = two_item_cart();

        let placed = service
            .place_order(
                AccountUuid::generate(),
                &mut cart,
                &shipping(),
                &PaymentMethod::CashOnDelivery,
            )
            .await?;

        assert!(placed.sync_pending, "append failure must be surfaced");
        assert!(cart.is_empty(), "local order still stands, cart clears");

        Ok(())
    }
}
