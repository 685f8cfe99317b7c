use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use crate::db::repository::DiningTableRepository;
use crate::utils::{AppError, AppResult};

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.get_db());
    Ok(Json(repo.find_all().await?))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    Ok(Json(repo.find_by_id(&id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = DiningTableRepository::new(state.get_db());
    let created = repo
        .create(DiningTable {
            id: None,
            number: payload.number,
            capacity: payload.capacity,
            is_occupied: false,
            qr_payload: String::new(),
        })
        .await?;
    tracing::info!(table = %created.number, "Table created");
    Ok(Json(created))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = DiningTableRepository::new(state.get_db());
    Ok(Json(repo.update(&id, payload).await?))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let removed = repo.delete(&id).await?;
    tracing::info!(table = %removed.number, "Table deleted");
    Ok(Json(removed))
}

/// Build and store the ordering URL encoded in this table's QR code
pub async fn generate_qr(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let table = repo.find_by_id(&id).await?;

    let payload = format!(
        "{}/table/{}",
        state.config.public_base_url.trim_end_matches('/'),
        table.key()
    );
    Ok(Json(repo.set_qr_payload(&id, payload).await?))
}
