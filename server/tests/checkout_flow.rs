//! Checkout against full server state
//!
//! Exercises the checkout handler directly: the session cart is the
//! source of truth for order lines, and placing the order empties it.

use axum::Json;
use axum::extract::State;

use shared::cart::CartItem;
use shared::order::{OrderStatus, OrderType};
use tableside_server::api::orders::handler::{self, CheckoutPayload};
use tableside_server::core::{Config, ServerState};
use tableside_server::db::models::OrderCreate;

async fn server_state(dir: &tempfile::TempDir) -> ServerState {
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    ServerState::initialize(&config).await.unwrap()
}

fn order_shell(items: Vec<CartItem>) -> OrderCreate {
    OrderCreate {
        order_type: OrderType::DineIn,
        table_number: "5".into(),
        items,
        payment_method: "Cash".into(),
        note: String::new(),
    }
}

#[tokio::test]
async fn checkout_uses_the_session_cart_not_the_payload() {
    let dir = tempfile::tempdir().unwrap();
    let state = server_state(&dir).await;

    state.carts.with("s1", |cart| {
        cart.add_item(CartItem::basic("line1", "Laksa", "9.80", 1));
        cart.add_item(CartItem::basic("line2", "Teh Tarik", "1.80", 2));
    });

    // Payload items differ from the cart; the cart must win
    let payload = CheckoutPayload {
        order: order_shell(vec![CartItem::basic("forged", "Free Lobster", "0.01", 9)]),
        session_id: Some("s1".into()),
    };
    let Json(order) = handler::checkout(State(state.clone()), Json(payload))
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Received);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].name, "Laksa");
    assert_eq!(order.items[1].name, "Teh Tarik");

    // Cart is emptied once the order is placed
    assert!(state.carts.snapshot("s1").is_empty());
}

#[tokio::test]
async fn checkout_with_an_empty_cart_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let state = server_state(&dir).await;

    let payload = CheckoutPayload {
        order: order_shell(vec![CartItem::basic("line1", "Laksa", "9.80", 1)]),
        session_id: Some("empty-session".into()),
    };
    assert!(handler::checkout(State(state.clone()), Json(payload))
        .await
        .is_err());

    // Without a session there is nothing to fall back to either
    let payload = CheckoutPayload {
        order: order_shell(vec![]),
        session_id: None,
    };
    assert!(handler::checkout(State(state), Json(payload)).await.is_err());
}

#[tokio::test]
async fn sessionless_checkout_keeps_the_payload_items() {
    let dir = tempfile::tempdir().unwrap();
    let state = server_state(&dir).await;

    let payload = CheckoutPayload {
        order: order_shell(vec![CartItem::basic("line1", "Mee Goreng", "7.50", 2)]),
        session_id: None,
    };
    let Json(order) = handler::checkout(State(state), Json(payload)).await.unwrap();
    assert_eq!(order.items.len(), 1);
    assert_eq!(order.items[0].name, "Mee Goreng");
}
