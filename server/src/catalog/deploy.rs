use std::collections::HashSet;
use std::sync::Arc;

use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::repository::{CategoryRepository, MenuItemRepository, RestaurantInfoRepository};
use crate::services::ImageStore;
use crate::utils::AppResult;

/// Outcome of one deploy run
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeployReport {
    pub items_deployed: usize,
    pub categories_deployed: usize,
    pub items_pruned: usize,
    pub categories_pruned: usize,
    pub images_stored: usize,
}

/// Menu deployment
///
/// Copies every draft item and category into the deployed tables under
/// the same record key, then deletes deployed records whose draft no
/// longer exists. Inline `data:` images are materialized through the
/// image store first, and the rewritten URL is written back to the
/// draft so the upload happens once.
///
/// The run is not atomic. A failure mid-way leaves some records
/// updated and some stale; re-running the deploy converges, since
/// every step is an upsert or a prune-by-absence.
pub struct DeployService {
    draft_items: MenuItemRepository,
    deployed_items: MenuItemRepository,
    draft_categories: CategoryRepository,
    deployed_categories: CategoryRepository,
    restaurant: RestaurantInfoRepository,
    images: Arc<ImageStore>,
}

impl DeployService {
    pub fn new(db: Surreal<Db>, images: Arc<ImageStore>) -> Self {
        Self {
            draft_items: MenuItemRepository::draft(db.clone()),
            deployed_items: MenuItemRepository::deployed(db.clone()),
            draft_categories: CategoryRepository::draft(db.clone()),
            deployed_categories: CategoryRepository::deployed(db.clone()),
            restaurant: RestaurantInfoRepository::new(db),
            images,
        }
    }

    pub async fn deploy(&self) -> AppResult<DeployReport> {
        let mut report = DeployReport::default();

        // Categories first so customers never see items pointing at
        // categories that have not landed yet
        let draft_categories = self.draft_categories.find_all().await?;
        let mut live_category_keys = HashSet::new();
        for mut category in draft_categories {
            let key = category.key();
            if key.is_empty() {
                continue;
            }

            if ImageStore::is_data_url(&category.image) {
                category.image = self.images.store_data_url(&category.image)?;
                report.images_stored += 1;
                self.draft_categories
                    .upsert_with_id(&key, category.clone())
                    .await?;
            }

            self.deployed_categories
                .upsert_with_id(&key, category)
                .await?;
            live_category_keys.insert(key);
            report.categories_deployed += 1;
        }

        let draft_items = self.draft_items.find_all().await?;
        let mut live_item_keys = HashSet::new();
        for mut item in draft_items {
            let key = item.key();
            if key.is_empty() {
                continue;
            }

            if ImageStore::is_data_url(&item.image) {
                item.image = self.images.store_data_url(&item.image)?;
                report.images_stored += 1;
                // Rewrite the draft too so the next deploy skips the upload
                self.draft_items
                    .upsert_with_id(&key, item.clone())
                    .await?;
            }

            self.deployed_items.upsert_with_id(&key, item).await?;
            live_item_keys.insert(key);
            report.items_deployed += 1;
        }

        // Settings ride along so the singleton always exists live
        let info = self.restaurant.get().await?;
        self.restaurant.save(info).await?;

        // Prune deployed records whose draft is gone
        for deployed in self.deployed_items.find_all().await? {
            let key = deployed.key();
            if !key.is_empty() && !live_item_keys.contains(&key) {
                self.deployed_items.delete(&key).await?;
                report.items_pruned += 1;
            }
        }
        for deployed in self.deployed_categories.find_all().await? {
            let key = deployed.key();
            if !key.is_empty() && !live_category_keys.contains(&key) {
                self.deployed_categories.delete(&key).await?;
                report.categories_pruned += 1;
            }
        }

        tracing::info!(
            items = report.items_deployed,
            categories = report.categories_deployed,
            pruned = report.items_pruned + report.categories_pruned,
            "Menu deployed"
        );

        Ok(report)
    }
}
