use std::cmp::Ordering;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{DiningTable, DiningTableUpdate};

const TABLE: &str = "dining_table";

/// Dining table repository
#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All tables, sorted numerically where the numbers parse ("2"
    /// before "10"), lexically otherwise.
    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        let mut tables: Vec<DiningTable> = self.base.db.select(TABLE).await?;
        tables.sort_by(|a, b| compare_table_numbers(&a.number, &b.number));
        Ok(tables)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<DiningTable> {
        let table: Option<DiningTable> = self.base.db.select((TABLE, id)).await?;
        table.ok_or_else(|| RepoError::NotFound(format!("{}:{}", TABLE, id)))
    }

    /// Create a table; the display number must not already be in use.
    pub async fn create(&self, table: DiningTable) -> RepoResult<DiningTable> {
        if self.number_exists(&table.number, None).await? {
            return Err(RepoError::Duplicate(format!(
                "table number '{}' already exists",
                table.number
            )));
        }
        let mut table = table;
        table.id = None;
        let created: Option<DiningTable> = self.base.db.create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("create returned no record".into()))
    }

    pub async fn update(&self, id: &str, update: DiningTableUpdate) -> RepoResult<DiningTable> {
        let mut table = self.find_by_id(id).await?;
        if let Some(number) = update.number {
            if number != table.number && self.number_exists(&number, Some(id)).await? {
                return Err(RepoError::Duplicate(format!(
                    "table number '{}' already exists",
                    number
                )));
            }
            table.number = number;
        }
        if let Some(capacity) = update.capacity {
            table.capacity = capacity;
        }
        if let Some(occupied) = update.is_occupied {
            table.is_occupied = occupied;
        }
        self.replace(id, table).await
    }

    pub async fn set_qr_payload(&self, id: &str, payload: String) -> RepoResult<DiningTable> {
        let mut table = self.find_by_id(id).await?;
        table.qr_payload = payload;
        self.replace(id, table).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<DiningTable> {
        let removed: Option<DiningTable> = self.base.db.delete((TABLE, id)).await?;
        removed.ok_or_else(|| RepoError::NotFound(format!("{}:{}", TABLE, id)))
    }

    async fn replace(&self, id: &str, mut table: DiningTable) -> RepoResult<DiningTable> {
        table.id = None;
        let stored: Option<DiningTable> = self.base.db.upsert((TABLE, id)).content(table).await?;
        stored.ok_or_else(|| RepoError::Database("upsert returned no record".into()))
    }

    async fn number_exists(&self, number: &str, exclude_id: Option<&str>) -> RepoResult<bool> {
        let tables: Vec<DiningTable> = self.base.db.select(TABLE).await?;
        Ok(tables.iter().any(|t| {
            t.number == number
                && exclude_id
                    .map(|id| t.key() != id)
                    .unwrap_or(true)
        }))
    }
}

fn compare_table_numbers(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_numbers_sort_numerically() {
        let mut numbers = vec!["10", "2", "1", "A1", "21"];
        numbers.sort_by(|a, b| compare_table_numbers(a, b));
        assert_eq!(numbers, vec!["1", "2", "10", "21", "A1"]);
    }
}
