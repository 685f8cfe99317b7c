//! Cart Module
//!
//! Session carts for customers mid-order. Cart contents live in memory
//! and are written through to disk so a restart does not lose them.

pub mod persistence;
pub mod session;
pub mod store;

pub use persistence::{CartPersistence, MemoryPersistence, RedbCartPersistence};
pub use session::CartSessions;
pub use store::CartStore;

/// Hard cap on distinct cart lines per session
pub const MAX_CART_ITEMS: usize = 20;

/// Carts larger than this are kept in memory only
pub const MAX_PERSISTED_BYTES: usize = 5 * 1024 * 1024;
