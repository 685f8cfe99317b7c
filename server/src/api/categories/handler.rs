use axum::{
    Json,
    extract::{Path, State},
};
use validator::Validate;

use crate::core::ServerState;
use crate::db::models::{Category, CategoryCreate, CategoryUpdate};
use crate::db::repository::CategoryRepository;
use crate::utils::{AppError, AppResult};

pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    let repo = CategoryRepository::draft(state.get_db());
    Ok(Json(repo.find_all().await?))
}

pub async fn get_one(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::draft(state.get_db());
    Ok(Json(repo.find_by_id(&id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<Json<Category>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = CategoryRepository::draft(state.get_db());
    let created = repo.create(payload.into_category()).await?;
    tracing::info!(category = %created.name, "Category created");
    Ok(Json(created))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<Json<Category>> {
    payload
        .validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repo = CategoryRepository::draft(state.get_db());
    Ok(Json(repo.update(&id, payload).await?))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Category>> {
    let repo = CategoryRepository::draft(state.get_db());
    let removed = repo.delete(&id).await?;
    tracing::info!(category = %removed.name, "Category deleted");
    Ok(Json(removed))
}
