use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::services::DescriptionSubject;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub subject: DescriptionSubject,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub description: String,
}

pub async fn generate(
    State(state): State<ServerState>,
    Json(payload): Json<GenerateRequest>,
) -> AppResult<Json<GenerateResponse>> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::validation("name is required"));
    }

    let description = state.description.generate(name, payload.subject).await?;
    Ok(Json(GenerateResponse { description }))
}
