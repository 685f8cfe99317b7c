use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::RestaurantInfo;

const TABLE: &str = "restaurant_info";
const KEY: &str = "main";

/// Restaurant settings repository
///
/// A single record at `restaurant_info:main`. Reads fall back to
/// defaults when the record has never been written.
#[derive(Clone)]
pub struct RestaurantInfoRepository {
    base: BaseRepository,
}

impl RestaurantInfoRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn get(&self) -> RepoResult<RestaurantInfo> {
        let info: Option<RestaurantInfo> = self.base.db.select((TABLE, KEY)).await?;
        Ok(info.unwrap_or_default())
    }

    pub async fn save(&self, info: RestaurantInfo) -> RepoResult<RestaurantInfo> {
        let stored: Option<RestaurantInfo> =
            self.base.db.upsert((TABLE, KEY)).content(info).await?;
        stored.ok_or_else(|| RepoError::Database("upsert returned no record".into()))
    }
}
