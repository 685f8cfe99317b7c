use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::{Validate, ValidationError};

use shared::types::PriceOption;

use super::serde_helpers;
use crate::pricing::parse_price;

/// Menu item record
///
/// Lives in `menu_item` (draft) or `deployed_menu_item` (published).
/// Prices are kept as entered strings; the pricing module parses them
/// at calculation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Base price as entered, e.g. "12.50"
    #[serde(default, alias = "price")]
    pub base_price: String,
    /// Image URL; drafts may carry a `data:` URL until deploy
    #[serde(default)]
    pub image: String,
    #[serde(with = "serde_helpers::string_list", default)]
    pub category_ids: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<PriceOption>,
    #[serde(default)]
    pub add_ons: Vec<PriceOption>,
    #[serde(deserialize_with = "serde_helpers::bool_false", default)]
    pub available: bool,
    #[serde(default)]
    pub sort_order: i64,
}

impl MenuItem {
    /// Record key as a plain string, empty if not yet persisted
    pub fn key(&self) -> String {
        self.id
            .as_ref()
            .map(|id| id.key().to_string())
            .unwrap_or_default()
    }
}

/// Reject prices that would parse to NaN and later poison cart totals.
/// Empty is fine (means 0).
fn price_is_well_formed(value: &str) -> Result<(), ValidationError> {
    if parse_price(value).is_nan() {
        let mut err = ValidationError::new("price");
        err.message = Some("must be a decimal number".into());
        return Err(err);
    }
    Ok(())
}

fn option_prices_are_well_formed(options: &[PriceOption]) -> Result<(), ValidationError> {
    for option in options {
        price_is_well_formed(&option.price)?;
    }
    Ok(())
}

/// Payload for creating a menu item
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MenuItemCreate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(custom(function = price_is_well_formed))]
    #[serde(default, alias = "price")]
    pub base_price: String,
    #[serde(default)]
    pub image: String,
    #[serde(with = "serde_helpers::string_list", default)]
    pub category_ids: Vec<String>,
    #[validate(custom(function = option_prices_are_well_formed))]
    #[serde(default)]
    pub sizes: Vec<PriceOption>,
    #[validate(custom(function = option_prices_are_well_formed))]
    #[serde(default)]
    pub add_ons: Vec<PriceOption>,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub sort_order: i64,
}

fn default_available() -> bool {
    true
}

impl MenuItemCreate {
    pub fn into_item(self) -> MenuItem {
        MenuItem {
            id: None,
            name: self.name,
            description: self.description,
            base_price: self.base_price,
            image: self.image,
            category_ids: self.category_ids,
            sizes: self.sizes,
            add_ons: self.add_ons,
            available: self.available,
            sort_order: self.sort_order,
        }
    }
}

/// Payload for updating a menu item (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct MenuItemUpdate {
    #[validate(length(min = 1, max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[validate(custom(function = price_is_well_formed))]
    #[serde(skip_serializing_if = "Option::is_none", alias = "price", default)]
    pub base_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(
        deserialize_with = "option_string_list",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub category_ids: Option<Vec<String>>,
    #[validate(custom(function = option_prices_are_well_formed))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizes: Option<Vec<PriceOption>>,
    #[validate(custom(function = option_prices_are_well_formed))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_ons: Option<Vec<PriceOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

fn option_string_list<'de, D>(d: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrap(#[serde(with = "serde_helpers::string_list")] Vec<String>);

    Option::<Wrap>::deserialize(d).map(|opt| opt.map(|w| w.0))
}

impl MenuItemUpdate {
    /// Build a fresh item from the payload, for PUT-as-create.
    /// Requires at least a name.
    pub fn into_item(self) -> Option<MenuItem> {
        let name = self.name.filter(|n| !n.is_empty())?;
        Some(MenuItem {
            id: None,
            name,
            description: self.description.unwrap_or_default(),
            base_price: self.base_price.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            category_ids: self.category_ids.unwrap_or_default(),
            sizes: self.sizes.unwrap_or_default(),
            add_ons: self.add_ons.unwrap_or_default(),
            available: self.available.unwrap_or(true),
            sort_order: self.sort_order.unwrap_or_default(),
        })
    }

    /// Apply partial fields onto an existing item
    pub fn apply(self, item: &mut MenuItem) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(base_price) = self.base_price {
            item.base_price = base_price;
        }
        if let Some(image) = self.image {
            item.image = image;
        }
        if let Some(category_ids) = self.category_ids {
            item.category_ids = category_ids;
        }
        if let Some(sizes) = self.sizes {
            item.sizes = sizes;
        }
        if let Some(add_ons) = self.add_ons {
            item.add_ons = add_ons;
        }
        if let Some(available) = self.available {
            item.available = available;
        }
        if let Some(sort_order) = self.sort_order {
            item.sort_order = sort_order;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_legacy_comma_joined_categories() {
        let json = r#"{
            "name": "Laksa",
            "base_price": "9.80",
            "category_ids": "cat_a,cat_b"
        }"#;
        let item: MenuItemCreate = serde_json::from_str(json).unwrap();
        assert_eq!(item.category_ids, vec!["cat_a", "cat_b"]);
        assert!(item.available);
    }

    #[test]
    fn legacy_price_field_name_still_deserializes() {
        let item: MenuItemCreate =
            serde_json::from_str(r#"{"name": "Laksa", "price": "9.80"}"#).unwrap();
        assert_eq!(item.base_price, "9.80");
    }

    #[test]
    fn unparseable_prices_are_rejected_before_storage() {
        let bad: MenuItemCreate =
            serde_json::from_str(r#"{"name": "Mystery", "base_price": "abc"}"#).unwrap();
        assert!(bad.validate().is_err());

        let bad_size: MenuItemCreate = serde_json::from_str(
            r#"{"name": "Laksa", "base_price": "9.80",
                "sizes": [{"name": "Large", "price": "12.5.0"}]}"#,
        )
        .unwrap();
        assert!(bad_size.validate().is_err());

        // Empty means "no price", which is allowed
        let empty: MenuItemCreate =
            serde_json::from_str(r#"{"name": "Tap Water", "base_price": ""}"#).unwrap();
        assert!(empty.validate().is_ok());

        let bad_update: MenuItemUpdate =
            serde_json::from_str(r#"{"base_price": "oops"}"#).unwrap();
        assert!(bad_update.validate().is_err());
    }

    #[test]
    fn update_applies_only_present_fields() {
        let mut item = MenuItemCreate {
            name: "Kaya Toast".into(),
            description: "classic".into(),
            base_price: "3.20".into(),
            image: String::new(),
            category_ids: vec!["breakfast".into()],
            sizes: vec![],
            add_ons: vec![],
            available: true,
            sort_order: 0,
        }
        .into_item();

        let update = MenuItemUpdate {
            base_price: Some("3.50".into()),
            available: Some(false),
            ..Default::default()
        };
        update.apply(&mut item);

        assert_eq!(item.base_price, "3.50");
        assert!(!item.available);
        assert_eq!(item.name, "Kaya Toast");
        assert_eq!(item.category_ids, vec!["breakfast"]);
    }
}
