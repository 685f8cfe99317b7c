//! HTTP API
//!
//! Route modules, one per resource. Each module exposes `router()`;
//! `build_app` merges them and applies the middleware stack.

pub mod cart;
pub mod categories;
pub mod describe;
pub mod health;
pub mod images;
pub mod menu;
pub mod menu_items;
pub mod orders;
pub mod settings;
pub mod tables;

use std::time::Instant;

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::ServerState;

/// Assemble the full application router
pub fn build_app(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health::router())
        .merge(menu_items::router())
        .merge(categories::router())
        .merge(menu::router())
        .merge(cart::router())
        .merge(orders::router())
        .merge(tables::router())
        .merge(settings::router())
        .merge(describe::router())
        .merge(images::router())
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Log every request with method, path, status and latency
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "request"
    );

    response
}
