//! Stored menu image serving

pub mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/image/{file}", get(handler::serve))
}
