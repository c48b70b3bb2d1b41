//! Newtype IDs for type-safe identifiers.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a product in the catalog.
///
/// Catalog files written by hand often use bare numbers for ids, so both
/// `"42"` and `42` deserialize to the same `ProductId`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(s),
            RawId::Number(n) => Self(n.to_string()),
        })
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
        assert_eq!(format!("{}", id), "prod-123");
    }

    #[test]
    fn test_id_deserialize_string_or_number() {
        let text: ProductId = serde_json::from_str(r#""sku-9""#).unwrap();
        assert_eq!(text, ProductId::new("sku-9"));

        let number: ProductId = serde_json::from_str("42").unwrap();
        assert_eq!(number, ProductId::new("42"));
    }

    #[test]
    fn test_id_rejects_other_shapes() {
        assert!(serde_json::from_str::<ProductId>("true").is_err());
        assert!(serde_json::from_str::<ProductId>("{}").is_err());
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id: ProductId = "abc".into();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc""#);
    }
}
