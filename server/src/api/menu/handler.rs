use axum::{Json, extract::State};
use serde::Serialize;

use crate::catalog::{DeployReport, DeployService};
use crate::core::ServerState;
use crate::db::models::{Category, MenuItem, RestaurantInfo};
use crate::db::repository::{CategoryRepository, MenuItemRepository, RestaurantInfoRepository};
use crate::utils::AppResult;

/// Everything the customer menu page needs in one response
#[derive(Debug, Serialize)]
pub struct DeployedMenu {
    pub items: Vec<MenuItem>,
    pub categories: Vec<Category>,
    pub restaurant: RestaurantInfo,
}

pub async fn deployed_menu(State(state): State<ServerState>) -> AppResult<Json<DeployedMenu>> {
    let items = MenuItemRepository::deployed(state.get_db())
        .find_all()
        .await?;
    let categories = CategoryRepository::deployed(state.get_db())
        .find_all()
        .await?;
    let restaurant = RestaurantInfoRepository::new(state.get_db()).get().await?;

    // Customers only see what's marked available
    let items = items.into_iter().filter(|i| i.available).collect();

    Ok(Json(DeployedMenu {
        items,
        categories,
        restaurant,
    }))
}

pub async fn deploy(State(state): State<ServerState>) -> AppResult<Json<DeployReport>> {
    let service = DeployService::new(state.get_db(), state.image_store.clone());
    Ok(Json(service.deploy().await?))
}
