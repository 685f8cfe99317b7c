//! Draft menu item CRUD (back office)

pub mod handler;

use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/menu-items",
            get(handler::list).post(handler::create),
        )
        .route("/api/menu-items/{id}", get(handler::get_one))
        .route("/api/menu-items/{id}", put(handler::update))
        .route("/api/menu-items/{id}", delete(handler::remove))
}
