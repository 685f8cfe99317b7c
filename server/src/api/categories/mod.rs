//! Draft category CRUD (back office)

pub mod handler;

use axum::{
    Router,
    routing::{delete, get, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route(
            "/api/categories",
            get(handler::list).post(handler::create),
        )
        .route("/api/categories/{id}", get(handler::get_one))
        .route("/api/categories/{id}", put(handler::update))
        .route("/api/categories/{id}", delete(handler::remove))
}
