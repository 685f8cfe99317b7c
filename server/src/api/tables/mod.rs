//! Dining table management

pub mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/tables", get(handler::list).post(handler::create))
        .route("/api/tables/{id}", get(handler::get_one))
        .route("/api/tables/{id}", put(handler::update))
        .route("/api/tables/{id}", delete(handler::remove))
        .route("/api/tables/{id}/qr", post(handler::generate_qr))
}
