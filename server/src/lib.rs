//! Tableside Server - restaurant ordering platform backend
//!
//! # Architecture
//!
//! - **HTTP API** (`api`): customer menu/cart/checkout, kitchen display,
//!   admin back office
//! - **Database** (`db`): embedded SurrealDB document store
//! - **Pricing** (`pricing`): cart totals and tax/service-charge math
//! - **Carts** (`cart`): session-scoped cart stores with durable persistence
//! - **Orders** (`orders`): order numbers and the live order feed
//! - **Catalog** (`catalog`): draft-to-live menu deploy
//! - **Services** (`services`): image store, AI description client
//!
//! # Module structure
//!
//! ```text
//! server/src/
//! ├── core/          # config, state, server, errors
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # models and repositories
//! ├── pricing/       # price calculations
//! ├── cart/          # session carts
//! ├── orders/        # order numbers, live feed
//! ├── catalog/       # menu deploy
//! ├── services/      # image store, description client
//! └── utils/         # errors, logging
//! ```

pub mod api;
pub mod cart;
pub mod catalog;
pub mod core;
pub mod db;
pub mod orders;
pub mod pricing;
pub mod services;
pub mod utils;

// Re-export public types
pub use cart::{CartSessions, CartStore};
pub use core::{Config, Server, ServerState};
pub use orders::OrderFeed;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Set up dotenv and logging. Called once from `main`.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
  ______      __    __          _     __
 /_  __/___ _/ /_  / /__  _____(_)___/ /__
  / / / __ `/ __ \/ / _ \/ ___/ / __  / _ \
 / / / /_/ / /_/ / /  __(__  ) / /_/ /  __/
/_/  \__,_/_.___/_/\___/____/_/\__,_/\___/
    "#
    );
}
