use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use shared::order::{self, OrderStatus, TransitionError};

use crate::cart::MAX_CART_ITEMS;
use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate};
use crate::db::repository::{OrderRepository, RestaurantInfoRepository};
use crate::orders::feed::{FeedAction, OrderFeedEvent};
use crate::orders::number;
use crate::pricing;
use crate::utils::{AppError, AppResult};

/// Checkout payload: the order plus the cart session to clear
#[derive(Debug, Deserialize)]
pub struct CheckoutPayload {
    #[serde(flatten)]
    pub order: OrderCreate,
    pub session_id: Option<String>,
}

pub async fn checkout(
    State(state): State<ServerState>,
    Json(payload): Json<CheckoutPayload>,
) -> AppResult<Json<Order>> {
    let mut order = payload.order;
    order
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    // With a session the server-side cart is the source of truth;
    // any items in the payload are ignored
    if let Some(session) = &payload.session_id {
        order.items = state.carts.snapshot(session);
    }
    if order.items.is_empty() {
        return Err(AppError::validation("order has no items"));
    }
    if order.items.len() > MAX_CART_ITEMS {
        return Err(AppError::business_rule(format!(
            "orders are limited to {MAX_CART_ITEMS} lines"
        )));
    }

    let subtotal = pricing::cart_total(&order.items);
    if !subtotal.is_finite() {
        return Err(AppError::validation(
            "cart contains an item with an unparseable price",
        ));
    }
    let info = RestaurantInfoRepository::new(state.get_db()).get().await?;
    let charges = pricing::compute_charges(subtotal, &info);

    let repo = OrderRepository::new(state.get_db());
    let order_number = number::generate_unique(&repo).await?;
    let order = repo
        .create(order.into_order(order_number, charges.total))
        .await?;

    if let Some(session) = payload.session_id {
        state.carts.clear(&session);
    }

    state.order_feed.publish(OrderFeedEvent {
        order_id: order.key(),
        action: FeedAction::Created,
        order: Some(order.clone()),
    });
    tracing::info!(
        order_number = %order.order_number,
        total = order.total,
        "Order placed"
    );

    Ok(Json(order))
}

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.get_db());
    Ok(Json(repo.find_all().await?))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    Ok(Json(repo.find_by_id(&id).await?))
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: OrderStatus,
}

pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StatusUpdate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    let current = repo.find_by_id(&id).await?;

    order::validate_transition(current.status, payload.status, &current.items)
        .map_err(transition_error)?;

    let updated = repo.update_status(&id, payload.status).await?;
    publish_update(&state, &updated);
    tracing::info!(
        order_number = %updated.order_number,
        status = %updated.status,
        "Order status advanced"
    );
    Ok(Json(updated))
}

fn transition_error(e: TransitionError) -> AppError {
    AppError::business_rule(e.to_string())
}

#[derive(Debug, Deserialize)]
pub struct ItemCompletedUpdate {
    pub completed: bool,
}

/// Mark one kitchen line done (or undone) by its position in the order
pub async fn set_item_completed(
    State(state): State<ServerState>,
    Path((id, index)): Path<(String, usize)>,
    Json(payload): Json<ItemCompletedUpdate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    let order = repo.find_by_id(&id).await?;

    let mut items = order.items;
    let line = items
        .get_mut(index)
        .ok_or_else(|| AppError::not_found(format!("order line {index}")))?;
    line.completed = payload.completed;

    let updated = repo.update_items(&id, items).await?;
    publish_update(&state, &updated);
    Ok(Json(updated))
}

#[derive(Debug, Deserialize)]
pub struct RushUpdate {
    pub is_rush: bool,
}

pub async fn set_rush(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RushUpdate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.get_db());
    let updated = repo.set_rush(&id, payload.is_rush).await?;
    publish_update(&state, &updated);
    Ok(Json(updated))
}

#[derive(Debug, Deserialize)]
pub struct RatingPayload {
    pub rating: u8,
    #[serde(default)]
    pub feedback: String,
}

pub async fn rate(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<RatingPayload>,
) -> AppResult<Json<Order>> {
    if !(1..=5).contains(&payload.rating) {
        return Err(AppError::validation("rating must be between 1 and 5"));
    }
    let repo = OrderRepository::new(state.get_db());
    let updated = repo
        .set_rating_once(&id, payload.rating, payload.feedback)
        .await?;
    Ok(Json(updated))
}

#[derive(Debug, Deserialize)]
pub struct OrderStatusQuery {
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OrderStatusView {
    pub status: OrderStatus,
    #[serde(rename = "orderNumber")]
    pub order_number: String,
}

/// Lightweight status poll for the order confirmation page
pub async fn order_status(
    State(state): State<ServerState>,
    Query(query): Query<OrderStatusQuery>,
) -> AppResult<Json<OrderStatusView>> {
    let order_id = query
        .order_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::invalid("orderId query parameter is required"))?;

    let repo = OrderRepository::new(state.get_db());
    let order = repo.find_by_id(&order_id).await?;

    Ok(Json(OrderStatusView {
        status: order.status,
        order_number: order.order_number,
    }))
}

fn publish_update(state: &ServerState, order: &Order) {
    state.order_feed.publish(OrderFeedEvent {
        order_id: order.key(),
        action: FeedAction::Updated,
        order: Some(order.clone()),
    });
}
