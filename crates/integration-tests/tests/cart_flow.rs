//! End-to-end cart tests against the real catalogue API.
//!
//! Seed stock levels used below (from `crates/api/db.json`):
//! product 1 → 3, product 2 → 5, product 3 → 2, product 4 → 1.

#![allow(clippy::unwrap_used)]

use rocketshoes_core::{Cart, Price, ProductId};
use rocketshoes_integration_tests::{Session, TestServer};
use rocketshoes_storefront::error::messages;
use rocketshoes_storefront::storage::CART_KEY;
use rocketshoes_storefront::{CartError, UpdateProductAmount};

fn id(raw: i32) -> ProductId {
    ProductId::new(raw)
}

/// Read the cart straight from the storage file.
fn persisted_cart(session: &Session) -> Cart {
    let raw = std::fs::read_to_string(&session.storage_path).unwrap();
    let entries: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let cart_json = entries[CART_KEY].as_str().unwrap();
    serde_json::from_str(cart_json).unwrap()
}

fn assert_in_sync(session: &Session) {
    assert_eq!(persisted_cart(session), *session.state.cart().cart());
}

// =============================================================================
// Catalogue API
// =============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::spawn().await;
    let body = reqwest::get(format!("{}/health", server.base_url()))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn test_client_reads_stock_and_products() {
    let server = TestServer::spawn().await;
    let session = Session::start(&server);
    let catalog = session.state.catalog();

    let stock = catalog.get_stock(id(1)).await.unwrap();
    assert_eq!(stock.amount, 3);

    let product = catalog.get_product(id(2)).await.unwrap();
    assert_eq!(product.price, Price::from_cents(13990));

    let products = catalog.list_products().await.unwrap();
    assert_eq!(products.len(), 6);
}

#[tokio::test]
async fn test_client_maps_404_to_not_found() {
    let server = TestServer::spawn().await;
    let session = Session::start(&server);

    let err = session.state.catalog().get_stock(id(999)).await.unwrap_err();
    assert!(matches!(
        err,
        rocketshoes_storefront::catalog::ApiError::NotFound(_)
    ));
}

// =============================================================================
// Cart operations
// =============================================================================

#[tokio::test]
async fn test_add_new_then_existing_product() {
    let server = TestServer::spawn().await;
    let session = Session::start(&server);
    let cart = session.state.cart();

    cart.add_product(id(2)).await.unwrap();
    let snapshot = cart.cart();
    let line = snapshot.get(id(2)).unwrap();
    assert_eq!(line.amount, 1);
    assert_eq!(
        line.title,
        "Tênis VR Caminhada Confortável Detalhes Couro Masculino"
    );
    assert_in_sync(&session);

    cart.add_product(id(1)).await.unwrap();
    cart.add_product(id(2)).await.unwrap();

    let snapshot = cart.cart();
    assert_eq!(snapshot.get(id(2)).unwrap().amount, 2);
    assert_eq!(snapshot.get(id(1)).unwrap().amount, 1);
    assert_eq!(snapshot.total(), Price::from_cents(2 * 13990 + 17990));
    assert!(session.notifier.messages().is_empty());
    assert_in_sync(&session);
}

#[tokio::test]
async fn test_add_with_single_unit_in_stock_is_rejected() {
    let server = TestServer::spawn().await;
    let session = Session::start(&server);

    let err = session.state.cart().add_product(id(4)).await.unwrap_err();

    assert!(matches!(err, CartError::OutOfStock { available: 1, .. }));
    assert!(session.state.cart().cart().is_empty());
    assert_eq!(session.notifier.messages(), vec![messages::OUT_OF_STOCK]);
    // Nothing was ever written
    assert!(!session.storage_path.exists());
}

#[tokio::test]
async fn test_add_unknown_product_reports_add_error() {
    let server = TestServer::spawn().await;
    let session = Session::start(&server);

    let err = session.state.cart().add_product(id(999)).await.unwrap_err();

    assert!(matches!(err, CartError::Network(_)));
    assert_eq!(session.notifier.messages(), vec![messages::ADD_FAILED]);
}

#[tokio::test]
async fn test_remove_present_and_absent_products() {
    let server = TestServer::spawn().await;
    let session = Session::start(&server);
    let cart = session.state.cart();
    cart.add_product(id(1)).await.unwrap();
    cart.add_product(id(2)).await.unwrap();

    cart.remove_product(id(1)).await.unwrap();
    assert_eq!(cart.cart().len(), 1);
    assert!(cart.cart().contains(id(2)));
    assert_in_sync(&session);

    let err = cart.remove_product(id(1)).await.unwrap_err();
    assert!(matches!(err, CartError::NotFound(_)));
    assert_eq!(session.notifier.messages(), vec![messages::REMOVE_FAILED]);
    assert_in_sync(&session);
}

#[tokio::test]
async fn test_update_amount_respects_stock() {
    let server = TestServer::spawn().await;
    let session = Session::start(&server);
    let cart = session.state.cart();
    cart.add_product(id(3)).await.unwrap();

    // Stock for product 3 is 2
    cart.update_product_amount(UpdateProductAmount {
        product_id: id(3),
        amount: 2,
    })
    .await
    .unwrap();
    assert_eq!(cart.cart().get(id(3)).unwrap().amount, 2);
    assert_in_sync(&session);

    let err = cart
        .update_product_amount(UpdateProductAmount {
            product_id: id(3),
            amount: 3,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CartError::OutOfStock { available: 2, .. }));
    assert_eq!(cart.cart().get(id(3)).unwrap().amount, 2);
    assert_eq!(session.notifier.take(), vec![messages::OUT_OF_STOCK]);

    cart.update_product_amount(UpdateProductAmount {
        product_id: id(3),
        amount: 0,
    })
    .await
    .unwrap();
    assert_eq!(cart.cart().get(id(3)).unwrap().amount, 2);
    assert!(session.notifier.messages().is_empty());
}

#[tokio::test]
async fn test_update_absent_product_checks_stock_first() {
    let server = TestServer::spawn().await;
    let session = Session::start(&server);
    let cart = session.state.cart();

    let err = cart
        .update_product_amount(UpdateProductAmount {
            product_id: id(3),
            amount: 5,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CartError::OutOfStock { available: 2, .. }));
    assert_eq!(session.notifier.take(), vec![messages::OUT_OF_STOCK]);

    cart.update_product_amount(UpdateProductAmount {
        product_id: id(3),
        amount: 1,
    })
    .await
    .unwrap();
    assert!(cart.cart().is_empty());
    assert!(session.notifier.messages().is_empty());
}

// =============================================================================
// Persistence across sessions
// =============================================================================

#[tokio::test]
async fn test_cart_survives_reload() {
    let server = TestServer::spawn().await;
    let first = Session::start(&server);
    first.state.cart().add_product(id(6)).await.unwrap();
    first.state.cart().add_product(id(6)).await.unwrap();
    first.state.cart().add_product(id(1)).await.unwrap();

    let reloaded = Session::resume(&server, &first.storage_path);

    assert_eq!(*reloaded.state.cart().cart(), *first.state.cart().cart());
    let ids: Vec<i32> = reloaded
        .state
        .cart()
        .cart()
        .iter()
        .map(|item| item.id.as_i32())
        .collect();
    assert_eq!(ids, vec![6, 1]);
}

#[tokio::test]
async fn test_corrupt_storage_fails_startup() {
    let server = TestServer::spawn().await;
    let session = Session::start(&server);
    session.state.cart().add_product(id(1)).await.unwrap();

    let mut entries = serde_json::Map::new();
    entries.insert(
        CART_KEY.to_string(),
        serde_json::Value::String("[{\"id\": 1".to_string()),
    );
    std::fs::write(
        &session.storage_path,
        serde_json::Value::Object(entries).to_string(),
    )
    .unwrap();

    let config = rocketshoes_storefront::config::StorefrontConfig {
        api: session.state.config().api.clone(),
        storage_path: session.storage_path.clone(),
    };
    let result = rocketshoes_storefront::state::AppState::new(
        config,
        std::sync::Arc::new(rocketshoes_storefront::notify::RecordingNotifier::new()),
    );
    assert!(result.is_err());
}
