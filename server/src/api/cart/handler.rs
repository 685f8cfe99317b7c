use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use shared::cart::CartItem;

use crate::cart::MAX_CART_ITEMS;
use crate::core::ServerState;
use crate::db::repository::RestaurantInfoRepository;
use crate::pricing::{self, ChargeBreakdown};
use crate::utils::{AppError, AppResult};

/// Cart contents with the running charge breakdown
#[derive(Debug, Serialize)]
pub struct CartView {
    pub items: Vec<CartItem>,
    #[serde(flatten)]
    pub charges: ChargeBreakdown,
}

async fn view(state: &ServerState, items: Vec<CartItem>) -> AppResult<CartView> {
    let info = RestaurantInfoRepository::new(state.get_db()).get().await?;
    let subtotal = pricing::cart_total(&items);
    let charges = pricing::compute_charges(subtotal, &info);
    Ok(CartView { items, charges })
}

pub async fn get_cart(
    State(state): State<ServerState>,
    Path(session): Path<String>,
) -> AppResult<Json<CartView>> {
    let items = state.carts.snapshot(&session);
    Ok(Json(view(&state, items).await?))
}

/// Just the charge breakdown, for the checkout summary
pub async fn totals(
    State(state): State<ServerState>,
    Path(session): Path<String>,
) -> AppResult<Json<ChargeBreakdown>> {
    let items = state.carts.snapshot(&session);
    let info = RestaurantInfoRepository::new(state.get_db()).get().await?;
    let subtotal = pricing::cart_total(&items);
    Ok(Json(pricing::compute_charges(subtotal, &info)))
}

pub async fn add_item(
    State(state): State<ServerState>,
    Path(session): Path<String>,
    Json(mut item): Json<CartItem>,
) -> AppResult<Json<CartView>> {
    if item.id.is_empty() {
        // Line identity is server-assigned when the client sends none
        item.id = uuid::Uuid::new_v4().to_string();
    }
    if item.quantity < 1 {
        return Err(AppError::validation("quantity must be at least 1"));
    }
    if state.carts.snapshot(&session).len() >= MAX_CART_ITEMS {
        return Err(AppError::business_rule(format!(
            "cart is limited to {MAX_CART_ITEMS} lines"
        )));
    }

    let items = state.carts.with(&session, |cart| cart.add_item(item));
    Ok(Json(view(&state, items).await?))
}

#[derive(Debug, Deserialize)]
pub struct QuantityUpdate {
    pub quantity: i64,
}

pub async fn update_quantity(
    State(state): State<ServerState>,
    Path((session, line_id)): Path<(String, String)>,
    Json(payload): Json<QuantityUpdate>,
) -> AppResult<Json<CartView>> {
    let items = state
        .carts
        .with(&session, |cart| cart.update_quantity(&line_id, payload.quantity));
    Ok(Json(view(&state, items).await?))
}

pub async fn remove_item(
    State(state): State<ServerState>,
    Path((session, line_id)): Path<(String, String)>,
) -> AppResult<Json<CartView>> {
    let items = state.carts.with(&session, |cart| cart.remove_item(&line_id));
    Ok(Json(view(&state, items).await?))
}

pub async fn clear_cart(
    State(state): State<ServerState>,
    Path(session): Path<String>,
) -> AppResult<Json<CartView>> {
    state.carts.clear(&session);
    Ok(Json(view(&state, Vec::new()).await?))
}
