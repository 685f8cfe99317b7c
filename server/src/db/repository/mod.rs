//! Repository Layer
//!
//! Thin typed access over the embedded database. Each repository owns a
//! clone of the `Surreal` handle and exposes async CRUD for one table.

pub mod category;
pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod restaurant_info;

pub use category::CategoryRepository;
pub use dining_table::DiningTableRepository;
pub use menu_item::MenuItemRepository;
pub use order::OrderRepository;
pub use restaurant_info::RestaurantInfoRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("duplicate record: {0}")]
    Duplicate(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(e: surrealdb::Error) -> Self {
        RepoError::Database(e.to_string())
    }
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Shared handle for repositories
#[derive(Clone)]
pub struct BaseRepository {
    pub db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }
}
