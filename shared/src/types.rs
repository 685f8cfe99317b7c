//! Common value types

use serde::{Deserialize, Serialize};

/// A named price delta, used for menu item sizes and add-ons.
///
/// Prices are decimal strings end to end ("2.50"); parsing happens at
/// calculation time, not at the edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceOption {
    pub name: String,
    pub price: String,
}

impl PriceOption {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: price.into(),
        }
    }
}

/// A payment method toggle as stored in restaurant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethodSetting {
    pub name: String,
    pub enabled: bool,
}
