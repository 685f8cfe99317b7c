//! Session cart endpoints

pub mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/cart/{session}",
            get(handler::get_cart).delete(handler::clear_cart),
        )
        .route("/api/cart/{session}/totals", get(handler::totals))
        .route("/api/cart/{session}/items", post(handler::add_item))
        .route(
            "/api/cart/{session}/items/{line_id}/quantity",
            put(handler::update_quantity),
        )
        .route(
            "/api/cart/{session}/items/{line_id}",
            delete(handler::remove_item),
        )
}
