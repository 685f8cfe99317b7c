//! Health check endpoints

use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Liveness plus a database round trip
async fn detailed(State(state): State<ServerState>) -> AppResult<Json<Value>> {
    state
        .get_db()
        .query("RETURN 1")
        .await
        .map_err(|e| AppError::database(format!("health query failed: {e}")))?;

    Ok(Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "database": "ok",
    })))
}
