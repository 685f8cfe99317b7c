use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Serve a stored menu image. Everything in the store is JPEG.
pub async fn serve(
    State(state): State<ServerState>,
    Path(file): Path<String>,
) -> AppResult<Response> {
    let path = state.image_store.resolve(&file)?;
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| AppError::internal(format!("failed to read image: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/jpeg"),
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        bytes,
    )
        .into_response())
}
