use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{RestaurantInfo, RestaurantInfoUpdate};
use crate::db::repository::RestaurantInfoRepository;
use crate::utils::{AppError, AppResult};

pub async fn get_settings(State(state): State<ServerState>) -> AppResult<Json<RestaurantInfo>> {
    let repo = RestaurantInfoRepository::new(state.get_db());
    Ok(Json(repo.get().await?))
}

pub async fn update_settings(
    State(state): State<ServerState>,
    Json(payload): Json<RestaurantInfoUpdate>,
) -> AppResult<Json<RestaurantInfo>> {
    // Rates are percentages (10 = 10%)
    for (name, rate) in [
        ("service charge", payload.service_charge_rate),
        ("GST", payload.gst_rate),
        ("tax", payload.tax_rate),
    ] {
        if let Some(rate) = rate {
            if !(0.0..=100.0).contains(&rate) {
                return Err(AppError::validation(format!(
                    "{name} rate must be between 0 and 100"
                )));
            }
        }
    }

    let repo = RestaurantInfoRepository::new(state.get_db());
    let mut info = repo.get().await?;
    payload.apply(&mut info);
    let stored = repo.save(info).await?;
    tracing::info!("Restaurant settings updated");
    Ok(Json(stored))
}
