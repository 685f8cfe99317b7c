use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::broadcast;

use crate::db::models::Order;

const CHANNEL_CAPACITY: usize = 64;

/// What happened to the order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedAction {
    Created,
    Updated,
    Deleted,
}

/// One order feed event. `order` is absent for deletions.
#[derive(Debug, Clone, Serialize)]
pub struct OrderFeedEvent {
    pub order_id: String,
    pub action: FeedAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

/// Live order publish/subscribe
///
/// A global channel carries every event (kitchen display); per-order
/// channels carry one order's events (customer status page). Slow
/// subscribers lag and miss events rather than blocking publishers.
pub struct OrderFeed {
    global: broadcast::Sender<OrderFeedEvent>,
    per_order: DashMap<String, broadcast::Sender<OrderFeedEvent>>,
}

impl Default for OrderFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderFeed {
    pub fn new() -> Self {
        let (global, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            global,
            per_order: DashMap::new(),
        }
    }

    pub fn publish(&self, event: OrderFeedEvent) {
        if let Some(sender) = self.per_order.get(&event.order_id) {
            let _ = sender.send(event.clone());
        }
        let _ = self.global.send(event);
    }

    /// Subscribe to one order's events
    pub fn subscribe(&self, order_id: &str) -> broadcast::Receiver<OrderFeedEvent> {
        self.per_order
            .entry(order_id.to_string())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0)
            .subscribe()
    }

    /// Subscribe to every order event
    pub fn subscribe_all(&self) -> broadcast::Receiver<OrderFeedEvent> {
        self.global.subscribe()
    }

    /// Drop a finished order's channel
    pub fn release(&self, order_id: &str) {
        self.per_order
            .remove_if(order_id, |_, sender| sender.receiver_count() == 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(order_id: &str, action: FeedAction) -> OrderFeedEvent {
        OrderFeedEvent {
            order_id: order_id.to_string(),
            action,
            order: None,
        }
    }

    #[tokio::test]
    async fn per_order_subscribers_see_only_their_order() {
        let feed = OrderFeed::new();
        let mut rx = feed.subscribe("o1");

        feed.publish(event("o1", FeedAction::Updated));
        feed.publish(event("o2", FeedAction::Updated));

        let got = rx.recv().await.unwrap();
        assert_eq!(got.order_id, "o1");
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn global_subscribers_see_everything() {
        let feed = OrderFeed::new();
        let mut rx = feed.subscribe_all();

        feed.publish(event("o1", FeedAction::Created));
        feed.publish(event("o2", FeedAction::Created));

        assert_eq!(rx.recv().await.unwrap().order_id, "o1");
        assert_eq!(rx.recv().await.unwrap().order_id, "o2");
    }

    #[tokio::test]
    async fn release_keeps_channels_with_live_subscribers() {
        let feed = OrderFeed::new();
        let _rx = feed.subscribe("o1");
        feed.release("o1");

        feed.publish(event("o1", FeedAction::Updated));
        assert!(feed.per_order.contains_key("o1"));
    }
}
