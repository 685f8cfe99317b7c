//! Deployed menu (customer-facing) and the deploy operation

pub mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/menu", get(handler::deployed_menu))
        .route("/api/menu/deploy", post(handler::deploy))
}
