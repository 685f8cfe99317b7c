use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Menu category record
///
/// Lives in `category` (draft) or `deployed_category` (published).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Image URL; drafts may carry a `data:` URL until deploy
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sort_order: i64,
}

impl Category {
    pub fn key(&self) -> String {
        self.id
            .as_ref()
            .map(|id| id.key().to_string())
            .unwrap_or_default()
    }
}

/// Payload for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryCreate {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub sort_order: i64,
}

impl CategoryCreate {
    pub fn into_category(self) -> Category {
        Category {
            id: None,
            name: self.name,
            description: self.description,
            image: self.image,
            sort_order: self.sort_order,
        }
    }
}

/// Payload for updating a category (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CategoryUpdate {
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
}

impl CategoryUpdate {
    /// Build a fresh category from the payload, for PUT-as-create.
    pub fn into_category(self) -> Option<Category> {
        let name = self.name.filter(|n| !n.is_empty())?;
        Some(Category {
            id: None,
            name,
            description: self.description.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
            sort_order: self.sort_order.unwrap_or_default(),
        })
    }

    pub fn apply(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(description) = self.description {
            category.description = description;
        }
        if let Some(image) = self.image {
            category.image = image;
        }
        if let Some(sort_order) = self.sort_order {
            category.sort_order = sort_order;
        }
    }
}
