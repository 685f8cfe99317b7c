//! Order endpoints: checkout, kitchen display, status lookups, live feed

pub mod handler;
pub mod sse;

use axum::{
    Router,
    routing::{get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/orders",
            get(handler::list).post(handler::checkout),
        )
        .route("/api/orders/events", get(sse::all_orders))
        .route("/api/orders/{id}", get(handler::get_one))
        .route("/api/orders/{id}/events", get(sse::one_order))
        .route("/api/orders/{id}/status", put(handler::update_status))
        .route(
            "/api/orders/{id}/items/{index}/completed",
            put(handler::set_item_completed),
        )
        .route("/api/orders/{id}/rush", put(handler::set_rush))
        .route("/api/orders/{id}/rating", put(handler::rate))
        .route("/api/order-status", get(handler::order_status))
}
