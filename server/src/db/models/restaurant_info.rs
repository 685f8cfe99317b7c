use serde::{Deserialize, Serialize};

use shared::types::PaymentMethodSetting;

/// Order confirmation page toggles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfirmationSettings {
    #[serde(default = "default_true")]
    pub show_checkboxes: bool,
    #[serde(default = "default_true")]
    pub show_estimated_time: bool,
    #[serde(default)]
    pub show_simple_message: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OrderConfirmationSettings {
    fn default() -> Self {
        Self {
            show_checkboxes: true,
            show_estimated_time: true,
            show_simple_message: false,
        }
    }
}

/// Restaurant settings singleton
///
/// Stored at `restaurant_info:main`. Rates are percentages (10 = 10%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub tax_enabled: bool,
    #[serde(default)]
    pub tax_rate: f64,
    #[serde(default)]
    pub gst_enabled: bool,
    #[serde(default)]
    pub gst_rate: f64,
    #[serde(default)]
    pub service_charge_enabled: bool,
    #[serde(default)]
    pub service_charge_rate: f64,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethodSetting>,
    /// Whether customers may pick dine-in vs takeaway
    #[serde(default = "default_true")]
    pub order_type_enabled: bool,
    #[serde(default)]
    pub order_confirmation_settings: OrderConfirmationSettings,
}

impl Default for RestaurantInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            logo: String::new(),
            tax_enabled: false,
            tax_rate: 0.0,
            gst_enabled: false,
            gst_rate: 9.0,
            service_charge_enabled: false,
            service_charge_rate: 10.0,
            payment_methods: Vec::new(),
            order_type_enabled: true,
            order_confirmation_settings: OrderConfirmationSettings::default(),
        }
    }
}

/// Partial settings update; only present fields are applied
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RestaurantInfoUpdate {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub tax_enabled: Option<bool>,
    pub tax_rate: Option<f64>,
    pub gst_enabled: Option<bool>,
    pub gst_rate: Option<f64>,
    pub service_charge_enabled: Option<bool>,
    pub service_charge_rate: Option<f64>,
    pub payment_methods: Option<Vec<PaymentMethodSetting>>,
    pub order_type_enabled: Option<bool>,
    pub order_confirmation_settings: Option<OrderConfirmationSettings>,
}

impl RestaurantInfoUpdate {
    pub fn apply(self, info: &mut RestaurantInfo) {
        if let Some(name) = self.name {
            info.name = name;
        }
        if let Some(logo) = self.logo {
            info.logo = logo;
        }
        if let Some(v) = self.tax_enabled {
            info.tax_enabled = v;
        }
        if let Some(v) = self.tax_rate {
            info.tax_rate = v;
        }
        if let Some(v) = self.gst_enabled {
            info.gst_enabled = v;
        }
        if let Some(v) = self.gst_rate {
            info.gst_rate = v;
        }
        if let Some(v) = self.service_charge_enabled {
            info.service_charge_enabled = v;
        }
        if let Some(v) = self.service_charge_rate {
            info.service_charge_rate = v;
        }
        if let Some(v) = self.payment_methods {
            info.payment_methods = v;
        }
        if let Some(v) = self.order_type_enabled {
            info.order_type_enabled = v;
        }
        if let Some(v) = self.order_confirmation_settings {
            info.order_confirmation_settings = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_applies_only_present_fields() {
        let mut info = RestaurantInfo::default();
        let update: RestaurantInfoUpdate = serde_json::from_str(
            r#"{"service_charge_enabled": true, "service_charge_rate": 10, "tax_enabled": true, "tax_rate": 7}"#,
        )
        .unwrap();
        update.apply(&mut info);

        assert!(info.service_charge_enabled);
        assert_eq!(info.service_charge_rate, 10.0);
        assert!(info.tax_enabled);
        assert_eq!(info.tax_rate, 7.0);
        // Untouched fields keep their defaults
        assert!(!info.gst_enabled);
        assert!(info.order_type_enabled);
        assert!(info.order_confirmation_settings.show_checkboxes);
    }
}
