use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResult};

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::draft(state.get_db());
    Ok(Json(repo.find_all().await?))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::draft(state.get_db());
    Ok(Json(repo.find_by_id(&id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = MenuItemRepository::draft(state.get_db());
    let created = repo.create(payload.into_item()).await?;
    tracing::info!(item = %created.name, "Menu item created");
    Ok(Json(created))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = MenuItemRepository::draft(state.get_db());
    Ok(Json(repo.update(&id, payload).await?))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let repo = MenuItemRepository::draft(state.get_db());
    let removed = repo.delete(&id).await?;
    tracing::info!(item = %removed.name, "Menu item deleted");
    Ok(Json(removed))
}
