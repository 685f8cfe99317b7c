//! Database models

pub mod category;
pub mod dining_table;
pub mod menu_item;
pub mod order;
pub mod restaurant_info;
pub mod serde_helpers;

pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use dining_table::{DiningTable, DiningTableCreate, DiningTableUpdate};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
pub use order::{Order, OrderCreate};
pub use restaurant_info::{OrderConfirmationSettings, RestaurantInfo, RestaurantInfoUpdate};
