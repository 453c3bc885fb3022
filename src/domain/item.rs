//! Item domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Resource;

/// Item domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Store-assigned identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Item name
    #[schema(example = "Sample item")]
    pub name: String,
    /// Optional free-form description
    #[schema(example = "A short description")]
    pub description: Option<String>,
    /// Unit price
    #[schema(example = 1000.0)]
    pub price: f64,
    /// Creation timestamp, fixed at insert time
    pub created_at: DateTime<Utc>,
}

/// Item create/update payload.
///
/// Identifier and timestamp are owned by the store; if a client sends them
/// they are dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct ItemInput {
    #[schema(example = "Sample item")]
    pub name: String,
    #[schema(example = "A short description")]
    pub description: Option<String>,
    #[schema(example = 1000.0)]
    pub price: f64,
}

impl ItemInput {
    pub fn new(name: impl Into<String>, description: Option<&str>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
            price,
        }
    }
}

impl Resource for Item {
    type Input = ItemInput;

    const NAME: &'static str = "Item";

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn build(id: i64, created_at: DateTime<Utc>, input: ItemInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_ignores_store_owned_fields() {
        let input: ItemInput = serde_json::from_str(
            r#"{"id": 42, "created_at": "yesterday", "name": "x", "price": 5}"#,
        )
        .unwrap();

        assert_eq!(input, ItemInput::new("x", None, 5.0));
    }

    #[test]
    fn missing_description_serializes_as_null() {
        let item = Item::build(7, Utc::now(), ItemInput::new("lamp", None, 12.5));
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], 7);
        assert!(json["description"].is_null());
        assert!(json["created_at"].is_string());
    }
}
