//! Order domain types and the status state machine
//!
//! An order advances through a fixed forward sequence:
//!
//! ```text
//! Received -> Preparing -> Ready to Serve -> Served
//! ```
//!
//! Transitions are one step at a time and never go backwards. Entering
//! `Served` additionally requires every item on the order to be marked
//! completed. The guard lives here so every controlling layer (KDS
//! handlers, clients) applies the same rules; raw storage writes are not
//! guarded, matching last-write-wins semantics everywhere else.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::CartItem;
use crate::types::PriceOption;

/// Order fulfilment status. Serialized with the customer-facing labels
/// ("Ready to Serve" contains spaces by design).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Received,
    Preparing,
    #[serde(rename = "Ready to Serve")]
    ReadyToServe,
    Served,
}

impl OrderStatus {
    /// Position in the fixed sequence (Received = 0).
    pub fn index(self) -> usize {
        match self {
            OrderStatus::Received => 0,
            OrderStatus::Preparing => 1,
            OrderStatus::ReadyToServe => 2,
            OrderStatus::Served => 3,
        }
    }

    /// The next status in the sequence, or `None` once served.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Received => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::ReadyToServe),
            OrderStatus::ReadyToServe => Some(OrderStatus::Served),
            OrderStatus::Served => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Served)
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Received => "Received",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::ReadyToServe => "Ready to Serve",
            OrderStatus::Served => "Served",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Dine-in vs takeaway, serialized with the original lowercase labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "dine-in")]
    DineIn,
    #[serde(rename = "takeaway")]
    Takeaway,
}

impl Default for OrderType {
    fn default() -> Self {
        OrderType::DineIn
    }
}

/// A cart line snapshotted onto an order, with its own completion flag
/// toggled independently by kitchen staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub name: String,
    pub quantity: i64,
    #[serde(default)]
    pub base_price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<PriceOption>,
    #[serde(default)]
    pub selected_add_ons: Vec<PriceOption>,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub completed: bool,
}

impl From<CartItem> for OrderItem {
    fn from(line: CartItem) -> Self {
        Self {
            id: line.id,
            name: line.name,
            quantity: line.quantity,
            base_price: line.base_price,
            selected_size: line.selected_size,
            selected_add_ons: line.selected_add_ons,
            note: line.note,
            completed: false,
        }
    }
}

/// Why a requested status change was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("order is already served")]
    AlreadyServed,

    #[error("cannot move from '{from}' back to '{to}'")]
    Backwards { from: OrderStatus, to: OrderStatus },

    #[error("cannot skip from '{from}' to '{to}'")]
    Skipped { from: OrderStatus, to: OrderStatus },

    #[error("cannot serve: {pending} item(s) not yet completed")]
    ItemsIncomplete { pending: usize },
}

/// Validate a requested transition against the current status and items.
///
/// Strictly forward, one step at a time; `Served` requires every item
/// completed.
pub fn validate_transition(
    current: OrderStatus,
    requested: OrderStatus,
    items: &[OrderItem],
) -> Result<(), TransitionError> {
    if current.is_terminal() {
        return Err(TransitionError::AlreadyServed);
    }
    if requested.index() <= current.index() {
        return Err(TransitionError::Backwards {
            from: current,
            to: requested,
        });
    }
    if requested.index() != current.index() + 1 {
        return Err(TransitionError::Skipped {
            from: current,
            to: requested,
        });
    }
    if requested == OrderStatus::Served {
        let pending = items.iter().filter(|i| !i.completed).count();
        if pending > 0 {
            return Err(TransitionError::ItemsIncomplete { pending });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(completed: bool) -> OrderItem {
        OrderItem {
            id: "menu_item:burger".into(),
            name: "Burger".into(),
            quantity: 1,
            base_price: "8.50".into(),
            selected_size: None,
            selected_add_ons: vec![],
            note: String::new(),
            completed,
        }
    }

    #[test]
    fn forward_one_step_is_allowed() {
        let items = vec![item(false)];
        assert!(validate_transition(OrderStatus::Received, OrderStatus::Preparing, &items).is_ok());
        assert!(
            validate_transition(OrderStatus::Preparing, OrderStatus::ReadyToServe, &items).is_ok()
        );
    }

    #[test]
    fn status_never_regresses() {
        let items = vec![item(true)];
        assert_eq!(
            validate_transition(OrderStatus::Preparing, OrderStatus::Received, &items),
            Err(TransitionError::Backwards {
                from: OrderStatus::Preparing,
                to: OrderStatus::Received,
            })
        );
    }

    #[test]
    fn skipping_a_step_is_rejected() {
        let items = vec![item(true)];
        assert_eq!(
            validate_transition(OrderStatus::Received, OrderStatus::ReadyToServe, &items),
            Err(TransitionError::Skipped {
                from: OrderStatus::Received,
                to: OrderStatus::ReadyToServe,
            })
        );
    }

    #[test]
    fn serve_is_blocked_until_every_item_is_complete() {
        let mut items = vec![item(true), item(false)];
        assert_eq!(
            validate_transition(OrderStatus::ReadyToServe, OrderStatus::Served, &items),
            Err(TransitionError::ItemsIncomplete { pending: 1 })
        );

        // The instant the last item completes, the transition opens up.
        items[1].completed = true;
        assert!(validate_transition(OrderStatus::ReadyToServe, OrderStatus::Served, &items).is_ok());
    }

    #[test]
    fn served_is_terminal() {
        let items = vec![item(true)];
        assert_eq!(
            validate_transition(OrderStatus::Served, OrderStatus::Served, &items),
            Err(TransitionError::AlreadyServed)
        );
        assert_eq!(OrderStatus::Served.next(), None);
    }

    #[test]
    fn status_labels_round_trip() {
        let json = serde_json::to_string(&OrderStatus::ReadyToServe).unwrap();
        assert_eq!(json, "\"Ready to Serve\"");
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::ReadyToServe);
    }
}
