use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::order::{OrderItem, OrderStatus};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::Order;

const TABLE: &str = "orders";

/// Order repository
///
/// Status transitions are validated by the caller before they reach
/// this layer; writes here are unconditional.
#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, mut order: Order) -> RepoResult<Order> {
        order.id = None;
        let created: Option<Order> = self.base.db.create(TABLE).content(order).await?;
        created.ok_or_else(|| RepoError::Database("create returned no record".into()))
    }

    /// All orders, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        let mut orders: Vec<Order> = self.base.db.select(TABLE).await?;
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        Ok(orders)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Order> {
        let order: Option<Order> = self.base.db.select((TABLE, id)).await?;
        order.ok_or_else(|| RepoError::NotFound(format!("{}:{}", TABLE, id)))
    }

    pub async fn find_by_order_number(&self, number: &str) -> RepoResult<Option<Order>> {
        let mut response = self
            .base
            .db
            .query("SELECT * FROM type::table($table) WHERE order_number = $number LIMIT 1")
            .bind(("table", TABLE))
            .bind(("number", number.to_string()))
            .await?;
        let orders: Vec<Order> = response.take(0)?;
        Ok(orders.into_iter().next())
    }

    pub async fn order_number_exists(&self, number: &str) -> RepoResult<bool> {
        Ok(self.find_by_order_number(number).await?.is_some())
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> RepoResult<Order> {
        let mut order = self.find_by_id(id).await?;
        order.status = status;
        self.replace(id, order).await
    }

    pub async fn update_items(&self, id: &str, items: Vec<OrderItem>) -> RepoResult<Order> {
        let mut order = self.find_by_id(id).await?;
        order.items = items;
        self.replace(id, order).await
    }

    pub async fn set_rush(&self, id: &str, is_rush: bool) -> RepoResult<Order> {
        let mut order = self.find_by_id(id).await?;
        order.is_rush = is_rush;
        self.replace(id, order).await
    }

    /// Record the customer's rating and feedback. A rating can only be
    /// given once.
    pub async fn set_rating_once(
        &self,
        id: &str,
        rating: u8,
        feedback: String,
    ) -> RepoResult<Order> {
        let mut order = self.find_by_id(id).await?;
        if order.rating.is_some() {
            return Err(RepoError::Validation("order already rated".into()));
        }
        order.rating = Some(rating);
        order.feedback = feedback;
        self.replace(id, order).await
    }

    async fn replace(&self, id: &str, mut order: Order) -> RepoResult<Order> {
        order.id = None;
        let stored: Option<Order> = self.base.db.upsert((TABLE, id)).content(order).await?;
        stored.ok_or_else(|| RepoError::Database("upsert returned no record".into()))
    }
}
