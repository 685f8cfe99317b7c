use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::cart::{CartPersistence, CartSessions, MemoryPersistence, RedbCartPersistence};
use crate::core::error::{Result, ServerError};
use crate::core::Config;
use crate::db::DbService;
use crate::orders::OrderFeed;
use crate::services::{DescriptionClient, ImageStore};

/// Server state - shared handles to every service
///
/// `ServerState` is cloned into each handler; all members are either
/// `Clone`-cheap handles or wrapped in `Arc`.
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | immutable configuration |
/// | db | embedded SurrealDB |
/// | carts | session cart registry |
/// | order_feed | live order publish/subscribe |
/// | image_store | materialized menu images |
/// | description | AI description client |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub carts: Arc<CartSessions>,
    pub order_feed: Arc<OrderFeed>,
    pub image_store: Arc<ImageStore>,
    pub description: Arc<DescriptionClient>,
}

impl ServerState {
    /// Initialize server state
    ///
    /// 1. Work directory structure (database/, uploads/images/, carts/)
    /// 2. Embedded database (work_dir/database/tableside.db)
    /// 3. Cart persistence (work_dir/carts/carts.redb; falls back to
    ///    memory-only if the file cannot be opened)
    /// 4. Order feed, image store, description client
    pub async fn initialize(config: &Config) -> Result<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(ServerError::Io)?;

        let db_path = config.database_dir().join("tableside.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .map_err(|e| ServerError::Database(e.to_string()))?;

        let persistence: Arc<dyn CartPersistence> =
            match RedbCartPersistence::open(config.carts_dir().join("carts.redb")) {
                Ok(p) => Arc::new(p),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        "Cart storage unavailable, carts will not survive a restart"
                    );
                    Arc::new(MemoryPersistence::new())
                }
            };

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
            carts: Arc::new(CartSessions::new(persistence)),
            order_feed: Arc::new(OrderFeed::new()),
            image_store: Arc::new(ImageStore::new(config.images_dir())),
            description: Arc::new(DescriptionClient::new(
                config.openai_api_url.clone(),
                config.openai_api_key.clone(),
                config.openai_model.clone(),
            )),
        })
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    pub fn order_feed(&self) -> &Arc<OrderFeed> {
        &self.order_feed
    }
}
