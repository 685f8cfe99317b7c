//! Cart line types
//!
//! A cart line is a full snapshot of the menu item it was configured from,
//! plus the customer's choices. Lines are never merged: two identical
//! configurations of the same dish stay as two entries.

use serde::{Deserialize, Serialize};

use crate::types::PriceOption;

/// One line in a customer's cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    /// Menu item id this line was configured from
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Decimal string; empty means 0
    #[serde(default)]
    pub base_price: String,
    #[serde(default)]
    pub image: String,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_size: Option<PriceOption>,
    #[serde(default)]
    pub selected_add_ons: Vec<PriceOption>,
    /// Free-text note for the kitchen
    #[serde(default)]
    pub note: String,
}

impl CartItem {
    /// Minimal line with no size, add-ons or note.
    pub fn basic(id: impl Into<String>, name: impl Into<String>, base_price: impl Into<String>, quantity: i64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            base_price: base_price.into(),
            image: String::new(),
            quantity,
            selected_size: None,
            selected_add_ons: Vec::new(),
            note: String::new(),
        }
    }
}
