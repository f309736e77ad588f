//! Untyped stock requests (JSON in, validated command out).

use serde::Deserialize;
use serde_json::Value as JsonValue;

use stockroom_core::{DomainError, DomainResult, ItemName};

/// A stock request after type checks: the name is non-empty text and the
/// quantity a whole number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum StockRequest {
    Add { item: ItemName, quantity: i64 },
    Remove { item: ItemName, quantity: i64 },
}

impl StockRequest {
    pub fn from_json(value: &JsonValue) -> DomainResult<Self> {
        // Tagged enums also deserialize from sequences; only objects are requests.
        if !value.is_object() {
            return Err(DomainError::validation("stock request must be a JSON object"));
        }
        Self::deserialize(value).map_err(|e| DomainError::validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_add_and_remove() {
        let add = StockRequest::from_json(&json!({"op": "add", "item": "apple", "quantity": 10}));
        assert_eq!(
            add.unwrap(),
            StockRequest::Add {
                item: ItemName::parse("apple").unwrap(),
                quantity: 10,
            }
        );

        let remove =
            StockRequest::from_json(&json!({"op": "remove", "item": "apple", "quantity": -1}));
        assert_eq!(
            remove.unwrap(),
            StockRequest::Remove {
                item: ItemName::parse("apple").unwrap(),
                quantity: -1,
            }
        );
    }

    #[test]
    fn rejects_wrong_types() {
        for bad in [
            json!({"op": "add", "item": 42, "quantity": 5}),
            json!({"op": "add", "item": "widget", "quantity": "five"}),
            json!({"op": "add", "item": "widget", "quantity": 1.5}),
            json!({"op": "add", "item": "widget"}),
            json!({"op": "add", "item": "", "quantity": 5}),
            json!({"op": "restock", "item": "widget", "quantity": 5}),
            json!(["add", "widget", 5]),
        ] {
            let err = StockRequest::from_json(&bad).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "{bad} -> {err:?}");
        }
    }
}
