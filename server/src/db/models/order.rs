use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use shared::cart::CartItem;
use shared::order::{OrderItem, OrderStatus, OrderType};

use super::serde_helpers;

/// Placed order record
///
/// `total` is the charged amount (subtotal plus enabled service charge
/// and GST), frozen at placement time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub id: Option<RecordId>,
    /// 6-digit customer-facing number, unique among stored orders
    pub order_number: String,
    pub status: OrderStatus,
    pub order_type: OrderType,
    #[serde(default)]
    pub table_number: String,
    pub items: Vec<OrderItem>,
    pub total: f64,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub note: String,
    #[serde(deserialize_with = "serde_helpers::bool_false", default)]
    pub is_rush: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub feedback: String,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub fn key(&self) -> String {
        self.id
            .as_ref()
            .map(|id| id.key().to_string())
            .unwrap_or_default()
    }
}

/// Checkout payload
///
/// `items` is only trusted when no cart session is supplied; with a
/// session the server's own cart is used instead.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderCreate {
    pub order_type: OrderType,
    #[serde(default)]
    pub table_number: String,
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub note: String,
}

impl OrderCreate {
    /// Build the stored order. Cart lines become kitchen lines with
    /// `completed = false`; the caller supplies number and total.
    pub fn into_order(self, order_number: String, total: f64) -> Order {
        Order {
            id: None,
            order_number,
            status: OrderStatus::Received,
            order_type: self.order_type,
            table_number: self.table_number,
            items: self.items.into_iter().map(OrderItem::from).collect(),
            total,
            payment_method: self.payment_method,
            note: self.note,
            is_rush: false,
            rating: None,
            feedback: String::new(),
            placed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_lines_start_incomplete() {
        let payload = OrderCreate {
            order_type: OrderType::DineIn,
            table_number: "5".into(),
            items: vec![CartItem::basic("m1", "Mee Goreng", "7.50", 2)],
            payment_method: "Cash".into(),
            note: String::new(),
        };
        let order = payload.into_order("123456".into(), 15.0);
        assert_eq!(order.status, OrderStatus::Received);
        assert!(order.items.iter().all(|i| !i.completed));
        assert!(!order.is_rush);
        assert!(order.rating.is_none());
    }
}
