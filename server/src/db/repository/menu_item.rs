use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{MenuItem, MenuItemUpdate};

pub const DRAFT_TABLE: &str = "menu_item";
pub const DEPLOYED_TABLE: &str = "deployed_menu_item";

/// Menu item repository
///
/// The same type serves both the draft table (back office edits) and
/// the deployed table (what customers see); pick with `draft()` or
/// `deployed()`.
#[derive(Clone)]
pub struct MenuItemRepository {
    base: BaseRepository,
    table: &'static str,
}

impl MenuItemRepository {
    pub fn draft(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
            table: DRAFT_TABLE,
        }
    }

    pub fn deployed(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
            table: DEPLOYED_TABLE,
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<MenuItem>> {
        let mut items: Vec<MenuItem> = self.base.db.select(self.table).await?;
        items.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.name.cmp(&b.name)));
        Ok(items)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<MenuItem> {
        let item: Option<MenuItem> = self.base.db.select((self.table, id)).await?;
        item.ok_or_else(|| RepoError::NotFound(format!("{}:{}", self.table, id)))
    }

    pub async fn create(&self, mut item: MenuItem) -> RepoResult<MenuItem> {
        item.id = None;
        let created: Option<MenuItem> = self.base.db.create(self.table).content(item).await?;
        created.ok_or_else(|| RepoError::Database("create returned no record".into()))
    }

    /// PUT semantics: merge into the existing record, or create one
    /// under this id when none exists yet.
    pub async fn update(&self, id: &str, update: MenuItemUpdate) -> RepoResult<MenuItem> {
        let item = match self.find_by_id(id).await {
            Ok(mut item) => {
                update.apply(&mut item);
                item
            }
            Err(RepoError::NotFound(_)) => update
                .into_item()
                .ok_or_else(|| RepoError::Validation("name is required".into()))?,
            Err(e) => return Err(e),
        };
        self.upsert_with_id(id, item).await
    }

    /// Write a record under a caller-chosen key, replacing any existing one
    pub async fn upsert_with_id(&self, id: &str, mut item: MenuItem) -> RepoResult<MenuItem> {
        item.id = None;
        let stored: Option<MenuItem> = self.base.db.upsert((self.table, id)).content(item).await?;
        stored.ok_or_else(|| RepoError::Database("upsert returned no record".into()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<MenuItem> {
        let removed: Option<MenuItem> = self.base.db.delete((self.table, id)).await?;
        removed.ok_or_else(|| RepoError::NotFound(format!("{}:{}", self.table, id)))
    }
}
