use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use axum_storefront_api::cart::{CartLine, CartStore};
use axum_storefront_api::catalog::MockCatalog;
use axum_storefront_api::checkout::{self, CheckoutItem, DEFAULT_UNIT_AMOUNT, SessionSpec};
use axum_storefront_api::error::AppError;
use axum_storefront_api::models::Product;
use axum_storefront_api::payments::{CheckoutSession, GatewayError, MockGateway, PaymentGateway};
use axum_storefront_api::routes::checkout::CreateCheckoutSessionRequest;
use axum_storefront_api::services::checkout_service;
use axum_storefront_api::state::AppState;

fn product(id: u32, price: Decimal) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        price,
        original_price: price,
        category: "Electronics".to_string(),
        brand: "Acme".to_string(),
        rating: dec!(4.5),
        reviews: 10,
        image: format!("/images/products/{id}.jpg"),
        in_stock: true,
        badge: None,
        description: String::new(),
    }
}

fn limited_line(product_id: u32, quantity: u32, stock_limit: Option<u32>) -> CartLine {
    CartLine {
        product_id,
        name: format!("Product {product_id}"),
        unit_price: dec!(20.00),
        original_unit_price: dec!(20.00),
        image: format!("/images/products/{product_id}.jpg"),
        variant: "Standard".to_string(),
        quantity,
        stock_limit,
    }
}

fn state_with(gateway: Arc<dyn PaymentGateway>) -> AppState {
    AppState {
        catalog: Arc::new(MockCatalog::new()),
        gateway,
        client_origin: "http://localhost:5173".to_string(),
    }
}

/// Test double that keeps the spec it was handed.
#[derive(Default)]
struct RecordingGateway {
    seen: Mutex<Option<SessionSpec>>,
}

#[async_trait]
impl PaymentGateway for RecordingGateway {
    async fn create_session(&self, spec: &SessionSpec) -> Result<CheckoutSession, GatewayError> {
        *self.seen.lock().unwrap() = Some(spec.clone());
        Ok(CheckoutSession {
            id: "cs_test_recorded".to_string(),
        })
    }
}

struct RejectingGateway;

#[async_trait]
impl PaymentGateway for RejectingGateway {
    async fn create_session(&self, _spec: &SessionSpec) -> Result<CheckoutSession, GatewayError> {
        Err(GatewayError::Api("Invalid API Key provided".to_string()))
    }
}

#[test]
fn adding_the_same_product_merges_lines() {
    let mut cart = CartStore::new();
    let p = product(1, dec!(10.00));

    cart.add(&p, 2);
    cart.add(&p, 3);

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 5);
    assert_eq!(cart.item_count(), 5);
}

#[test]
fn variant_falls_back_to_category_then_standard() {
    let mut cart = CartStore::new();
    cart.add(&product(1, dec!(10.00)), 1);
    assert_eq!(cart.lines()[0].variant, "Electronics");

    let mut uncategorized = product(2, dec!(10.00));
    uncategorized.category = String::new();
    cart.add(&uncategorized, 1);
    assert_eq!(cart.lines()[1].variant, "Standard");
}

#[test]
fn update_to_zero_removes_the_line() {
    let mut cart = CartStore::new();
    cart.add(&product(1, dec!(10.00)), 2);

    cart.update_quantity(1, 0);

    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
}

#[test]
fn mixed_sequences_keep_count_and_total_consistent() {
    let mut cart = CartStore::new();
    let a = product(1, dec!(19.99));
    let b = product(2, dec!(5.50));

    cart.add(&a, 2);
    cart.add(&b, 1);
    cart.update_quantity(1, 4);
    cart.add(&b, 2);
    cart.remove(3); // absent id, no-op

    assert_eq!(cart.item_count(), 7);
    assert_eq!(cart.total(), dec!(96.46));

    cart.remove(1);
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.total(), dec!(16.50));

    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.total(), dec!(0));
}

#[test]
fn stock_limit_clamps_merged_quantity() {
    let mut cart = CartStore::new();

    cart.add_line(limited_line(9, 2, Some(3)));
    cart.add_line(limited_line(9, 4, Some(3)));

    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.lines()[0].quantity, 3);
}

#[test]
fn zero_stock_limit_never_admits_a_line() {
    let mut cart = CartStore::new();

    cart.add_line(limited_line(9, 2, Some(0)));

    assert!(cart.is_empty());
}

#[test]
fn checkout_items_carry_minor_units_in_cart_order() {
    let mut cart = CartStore::new();
    cart.add(&product(1, dec!(10.00)), 2);
    cart.add(&product(2, dec!(5.00)), 1);

    let items = cart.checkout_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].price, Some(1000));
    assert_eq!(items[0].quantity, 2);
    assert_eq!(items[1].price, Some(500));
    assert_eq!(items[1].quantity, 1);

    let lines = checkout::line_items(&items);
    assert_eq!(lines[0].unit_amount, 1000);
    assert_eq!(lines[1].unit_amount, 500);

    let spec = SessionSpec::new("http://localhost:5173", lines);
    assert_eq!(spec.amount_total(), 2500);
}

#[test]
fn missing_or_zero_price_takes_the_fallback_amount() {
    let items = vec![
        CheckoutItem {
            id: 1,
            name: "No price".to_string(),
            price: None,
            quantity: 1,
        },
        CheckoutItem {
            id: 2,
            name: "Zero price".to_string(),
            price: Some(0),
            quantity: 2,
        },
    ];

    let lines = checkout::line_items(&items);

    assert_eq!(lines[0].unit_amount, DEFAULT_UNIT_AMOUNT);
    assert_eq!(lines[1].unit_amount, DEFAULT_UNIT_AMOUNT);
    assert_eq!(lines[1].quantity, 2);
}

#[test]
fn checkout_request_accepts_items_without_a_price() {
    let payload: CreateCheckoutSessionRequest =
        serde_json::from_str(r#"{ "items": [{ "id": 5, "name": "Socks", "quantity": 2 }] }"#)
            .unwrap();

    assert_eq!(payload.items[0].price, None);
    assert_eq!(payload.items[0].quantity, 2);
}

#[test]
fn minor_unit_conversion_rounds_half_away_from_zero() {
    assert_eq!(checkout::to_minor_units(dec!(29.99)), 2999);
    assert_eq!(checkout::to_minor_units(dec!(10.005)), 1001);
    assert_eq!(checkout::to_minor_units(dec!(10.004)), 1000);
}

#[test]
fn session_spec_pins_the_hosted_flow() {
    let spec = SessionSpec::new(
        "http://localhost:5173/",
        checkout::line_items(&[CheckoutItem {
            id: 1,
            name: "Headphones".to_string(),
            price: Some(27999),
            quantity: 1,
        }]),
    );

    assert_eq!(spec.mode, "payment");
    assert_eq!(spec.payment_method_types, ["card"]);
    assert_eq!(
        spec.success_url,
        "http://localhost:5173/checkout-success?session_id={CHECKOUT_SESSION_ID}"
    );
    assert_eq!(spec.cancel_url, "http://localhost:5173/shopping-cart");
    assert!(spec.automatic_tax);
    assert_eq!(spec.allowed_shipping_countries, ["US", "CA"]);
}

#[test]
fn form_encoding_flattens_lines_and_settings() {
    let spec = SessionSpec::new(
        "https://shop.example.com",
        checkout::line_items(&[CheckoutItem {
            id: 1,
            name: "Headphones".to_string(),
            price: Some(27999),
            quantity: 1,
        }]),
    );

    let params = spec.to_form_params();
    let get = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    };

    assert_eq!(get("mode"), Some("payment"));
    assert_eq!(get("payment_method_types[0]"), Some("card"));
    assert_eq!(get("line_items[0][price_data][currency]"), Some("usd"));
    assert_eq!(
        get("line_items[0][price_data][product_data][name]"),
        Some("Headphones")
    );
    assert_eq!(get("line_items[0][price_data][unit_amount]"), Some("27999"));
    assert_eq!(get("line_items[0][quantity]"), Some("1"));
    assert_eq!(
        get("success_url"),
        Some("https://shop.example.com/checkout-success?session_id={CHECKOUT_SESSION_ID}")
    );
    assert_eq!(get("automatic_tax[enabled]"), Some("true"));
    assert_eq!(
        get("shipping_address_collection[allowed_countries][0]"),
        Some("US")
    );
    assert_eq!(
        get("shipping_address_collection[allowed_countries][1]"),
        Some("CA")
    );
}

#[tokio::test]
async fn create_session_builds_the_processor_request() {
    let recording = Arc::new(RecordingGateway::default());
    let state = state_with(recording.clone());

    let mut cart = CartStore::new();
    cart.add(&product(1, dec!(279.99)), 1);
    cart.add(&product(2, dec!(29.99)), 2);

    let payload = CreateCheckoutSessionRequest {
        items: cart.checkout_items(),
    };
    let session = checkout_service::create_session(&state, payload)
        .await
        .unwrap();
    assert_eq!(session.id, "cs_test_recorded");

    let seen = recording
        .seen
        .lock()
        .unwrap()
        .clone()
        .expect("gateway called");
    assert_eq!(seen.mode, "payment");
    assert_eq!(seen.line_items.len(), 2);
    assert_eq!(seen.line_items[0].unit_amount, 27999);
    assert_eq!(seen.line_items[1].unit_amount, 2999);
    assert_eq!(seen.line_items[1].quantity, 2);
    assert_eq!(seen.amount_total(), 27999 + 2 * 2999);
    assert_eq!(
        seen.success_url,
        "http://localhost:5173/checkout-success?session_id={CHECKOUT_SESSION_ID}"
    );
    assert_eq!(seen.cancel_url, "http://localhost:5173/shopping-cart");
    assert_eq!(seen.allowed_shipping_countries, ["US", "CA"]);
}

#[tokio::test]
async fn absent_prices_fall_back_on_the_wire() {
    let recording = Arc::new(RecordingGateway::default());
    let state = state_with(recording.clone());

    let payload = CreateCheckoutSessionRequest {
        items: vec![CheckoutItem {
            id: 7,
            name: "Mystery item".to_string(),
            price: None,
            quantity: 3,
        }],
    };
    checkout_service::create_session(&state, payload)
        .await
        .unwrap();

    let seen = recording
        .seen
        .lock()
        .unwrap()
        .clone()
        .expect("gateway called");
    assert_eq!(seen.line_items[0].unit_amount, DEFAULT_UNIT_AMOUNT);
    assert_eq!(seen.line_items[0].quantity, 3);
}

#[tokio::test]
async fn gateway_rejection_surfaces_as_a_checkout_failure() {
    let state = state_with(Arc::new(RejectingGateway));

    let payload = CreateCheckoutSessionRequest {
        items: vec![CheckoutItem {
            id: 1,
            name: "Headphones".to_string(),
            price: Some(27999),
            quantity: 1,
        }],
    };
    let err = checkout_service::create_session(&state, payload)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Checkout(_)));
    // the processor's message passes through unchanged
    assert_eq!(err.to_string(), "Invalid API Key provided");

    let response = err.into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn mock_gateway_mints_test_sessions_and_rejects_empty_carts() {
    let state = state_with(Arc::new(MockGateway));

    let ok = checkout_service::create_session(
        &state,
        CreateCheckoutSessionRequest {
            items: vec![CheckoutItem {
                id: 1,
                name: "Headphones".to_string(),
                price: Some(27999),
                quantity: 1,
            }],
        },
    )
    .await
    .unwrap();
    assert!(ok.id.starts_with("cs_test_"));

    let err = checkout_service::create_session(
        &state,
        CreateCheckoutSessionRequest { items: vec![] },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Checkout(_)));
}
