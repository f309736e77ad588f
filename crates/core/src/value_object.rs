//! Value objects: equality by value, not identity.

use core::borrow::Borrow;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" a value
/// object, construct a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct ItemName(String);
///
/// impl ValueObject for ItemName {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Name of a stocked item.
///
/// Guaranteed non-empty. Whitespace is kept verbatim: `" apple"` and `"apple"`
/// are different items, matching what the persisted file stores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<&str> for ItemName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

// Lets ordered maps keyed by `ItemName` be queried with a plain `&str`.
impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let err = ItemName::parse("").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn whitespace_is_preserved() {
        let name = ItemName::parse(" apple").unwrap();
        assert_eq!(name.as_str(), " apple");
        assert_ne!(name, ItemName::parse("apple").unwrap());
    }

    #[test]
    fn deserialization_enforces_non_empty() {
        let ok: ItemName = serde_json::from_str("\"widget\"").unwrap();
        assert_eq!(ok.as_str(), "widget");

        assert!(serde_json::from_str::<ItemName>("\"\"").is_err());
        assert!(serde_json::from_str::<ItemName>("42").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = ItemName::parse("banana").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"banana\"");
    }
}
