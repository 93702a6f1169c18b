//! End-to-end storefront flow over in-memory collaborators.
//!
//! Wires a full session through [`StorefrontContext`]: sign up, browse the
//! demo catalog, fill a cart, save a wishlist entry, place an order, and
//! walk the order's status machine to delivery. The document store is
//! inspected afterwards to confirm what a reconnecting session would see.

use std::sync::Arc;

use testresult::TestResult;
use velvet_cart::remote::DocumentStore;

use velvet_cart::{
    auth::{Account, AccountUuid, MockAuthProvider},
    context::StorefrontContext,
    domain::{
        checkout::{PaymentMethod, ShippingDetails},
        orders::OrderStatus,
    },
    notify::TracingNotifier,
    remote::{MemoryDocumentStore, MemoryLocalStore},
};

fn provider_for(account: Account) -> Arc<MockAuthProvider> {
    let mut provider = MockAuthProvider::new();
    provider
        .expect_sign_up()
        .returning(move |_, _, display_name| {
            let mut account = account.clone();
            account.display_name = display_name.to_owned();
            Ok(account)
        });

    Arc::new(provider)
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

#[tokio::test]
async fn signup_browse_and_checkout() -> TestResult {
    let documents = Arc::new(MemoryDocumentStore::new());
    let account = Account {
        uuid: AccountUuid::generate(),
        email: "asha@example.com".to_owned(),
        display_name: String::new(),
    };

    let mut context = StorefrontContext::demo(
        provider_for(account.clone()),
        documents.clone(),
        Arc::new(MemoryLocalStore::new()),
        Arc::new(TracingNotifier),
    )?;

    let registered = context
        .accounts
        .register(velvet_cart::auth::NewAccount {
            email: account.email.clone(),
            password: "correct horse".to_owned(),
            first_name: "Asha".to_owned(),
            last_name: "Verma".to_owned(),
            role: velvet_cart::auth::Role::User,
        })
        .await?;
    assert!(!registered.sync_pending);
    assert_eq!(registered.account.display_name, "Asha Verma");

    // Browse: pick the two cheapest in-stock products.
    let catalog = context.catalog.clone();
    let mut picks: Vec<_> = catalog.products().iter().collect();
    picks.sort_by_key(|product| product.price);
    let (first, second) = (picks[0].clone(), picks[1].clone());

    context.cart.stock_check(&first, 2)?;
    context.cart.add_to_cart(&first, 2);
    context.cart.add_to_cart(&second, 1);
    assert_eq!(context.cart.cart().total_quantity(), 3);

    context.wishlist.bind(account.uuid).await;
    context.wishlist.add(&second).await?;

    let expected = context.cart.pricing(context.checkout.config());

    let placed = context
        .place_order(account.uuid, &shipping(), &PaymentMethod::CashOnDelivery)
        .await?;

    assert!(!placed.sync_pending);
    assert!(context.cart.cart().is_empty());
    assert_eq!(placed.order.grand_total, expected.grand_total);
    assert_eq!(placed.order.status, OrderStatus::Pending);

    // The order history is what a fresh session would hydrate.
    let doc = documents
        .get_document("users", &account.uuid.to_string())
        .await?;
    let orders = doc
        .as_ref()
        .and_then(|fields| fields.get("orders"))
        .and_then(|value| value.as_array())
        .map(Vec::len);
    assert_eq!(orders, Some(1));

    Ok(())
}

#[tokio::test]
async fn order_walks_the_status_machine_to_delivery() -> TestResult {
    let account = Account {
        uuid: AccountUuid::generate(),
        email: "asha@example.com".to_owned(),
        display_name: String::new(),
    };

    let mut context = StorefrontContext::demo(
        provider_for(account.clone()),
        Arc::new(MemoryDocumentStore::new()),
        Arc::new(MemoryLocalStore::new()),
        Arc::new(TracingNotifier),
    )?;

    let product = context.catalog.products()[0].clone();
    context.cart.add_to_cart(&product, 1);

    let placed = context
        .place_order(account.uuid, &shipping(), &PaymentMethod::CashOnDelivery)
        .await?;
    let mut order = placed.order;

    for status in [
        OrderStatus::Confirmed,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ] {
        order.advance_to(status, jiff::Timestamp::now())?;
    }

    assert_eq!(order.status, OrderStatus::Delivered);
    assert_eq!(order.timeline.len(), 6, "every step lands in the timeline");
    assert!(
        order.cancel(jiff::Timestamp::now()).is_err(),
        "delivered orders cannot be cancelled"
    );

    Ok(())
}
