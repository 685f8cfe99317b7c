use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

use super::serde_helpers;

/// Dining table record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    #[serde(
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub id: Option<RecordId>,
    /// Display number; kept as a string so "12A" works
    pub number: String,
    #[serde(default)]
    pub capacity: i64,
    #[serde(deserialize_with = "serde_helpers::bool_false", default)]
    pub is_occupied: bool,
    /// Ordering URL encoded in this table's QR code, set on demand
    #[serde(default)]
    pub qr_payload: String,
}

impl DiningTable {
    pub fn key(&self) -> String {
        self.id
            .as_ref()
            .map(|id| id.key().to_string())
            .unwrap_or_default()
    }
}

/// Payload for creating a table
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableCreate {
    #[validate(length(min = 1, max = 20))]
    pub number: String,
    #[serde(default = "default_capacity")]
    pub capacity: i64,
}

fn default_capacity() -> i64 {
    4
}

/// Payload for updating a table (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DiningTableUpdate {
    #[validate(length(min = 1, max = 20))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_occupied: Option<bool>,
}
