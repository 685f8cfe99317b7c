//! Shared domain types for the Tableside ordering platform
//!
//! Everything the server and its clients must agree on lives here:
//!
//! - **cart** (`cart`): customer cart lines
//! - **orders** (`order`): order items, order status state machine
//! - **common types** (`types`): price options, payment methods

pub mod cart;
pub mod order;
pub mod types;

pub use cart::CartItem;
pub use order::{OrderItem, OrderStatus, OrderType, TransitionError};
pub use types::{PaymentMethodSetting, PriceOption};
