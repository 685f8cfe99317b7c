use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Category, CategoryUpdate};

pub const DRAFT_TABLE: &str = "category";
pub const DEPLOYED_TABLE: &str = "deployed_category";

/// Category repository; draft and deployed variants share the type
#[derive(Clone)]
pub struct CategoryRepository {
    base: BaseRepository,
    table: &'static str,
}

impl CategoryRepository {
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

    pub async fn find_all(&self) -> RepoResult<Vec<Category>> {
        let mut categories: Vec<Category> = self.base.db.select(self.table).await?;
        categories.sort_by(|a, b| a.sort_order.cmp(&b.sort_order).then(a.name.cmp(&b.name)));
        Ok(categories)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Category> {
        let category: Option<Category> = self.base.db.select((self.table, id)).await?;
        category.ok_or_else(|| RepoError::NotFound(format!("{}:{}", self.table, id)))
    }

    pub async fn create(&self, mut category: Category) -> RepoResult<Category> {
        category.id = None;
        let created: Option<Category> = self.base.db.create(self.table).content(category).await?;
        created.ok_or_else(|| RepoError::Database("create returned no record".into()))
    }

    /// PUT semantics: merge into the existing record, or create one
    /// under this id when none exists yet.
    pub async fn update(&self, id: &str, update: CategoryUpdate) -> RepoResult<Category> {
        let category = match self.find_by_id(id).await {
            Ok(mut category) => {
                update.apply(&mut category);
                category
            }
            Err(RepoError::NotFound(_)) => update
                .into_category()
                .ok_or_else(|| RepoError::Validation("name is required".into()))?,
            Err(e) => return Err(e),
        };
        self.upsert_with_id(id, category).await
    }

    pub async fn upsert_with_id(&self, id: &str, mut category: Category) -> RepoResult<Category> {
        category.id = None;
        let stored: Option<Category> = self
            .base
            .db
            .upsert((self.table, id))
            .content(category)
            .await?;
        stored.ok_or_else(|| RepoError::Database("upsert returned no record".into()))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<Category> {
        let removed: Option<Category> = self.base.db.delete((self.table, id)).await?;
        removed.ok_or_else(|| RepoError::NotFound(format!("{}:{}", self.table, id)))
    }
}
