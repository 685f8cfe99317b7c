//! Orders Module
//!
//! Order number allocation and the live order feed consumed by the
//! kitchen display and customer status pages.

pub mod feed;
pub mod number;

pub use feed::{FeedAction, OrderFeed, OrderFeedEvent};
pub use number::generate_unique;
