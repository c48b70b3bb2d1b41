//! Product types.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product record as it appears in the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Unique product identifier (string or number in the file).
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Free-form category name.
    pub category: String,
    /// Unit price, at whatever precision the file gives.
    pub price: Decimal,
    /// Description text.
    #[serde(default)]
    pub description: String,
    /// Image URL.
    #[serde(default)]
    pub image_url: String,
}

/// A product in the catalog. Immutable once loaded.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Free-form category name.
    pub category: String,
    /// Unit price.
    pub price: Money,
    /// Description text.
    pub description: String,
    /// Image URL.
    pub image_url: String,
}

impl Product {
    /// Create a product with an empty description and image.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: Money,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            description: String::new(),
            image_url: String::new(),
        }
    }

    /// Convert a catalog record, pricing it in `currency`.
    pub fn from_record(record: ProductRecord, currency: Currency) -> Self {
        Self {
            id: record.id,
            name: record.name,
            category: record.category,
            price: Money::new(record.price, currency),
            description: record.description,
            image_url: record.image_url,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Description cut to at most `max_chars` characters, with `...`
    /// appended when something was cut.
    pub fn excerpt(&self, max_chars: usize) -> String {
        let mut chars = self.description.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{}...", head)
        } else {
            head
        }
    }

    /// The image URL, or `fallback` when the product has none.
    pub fn image_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.image_url.trim().is_empty() {
            fallback
        } else {
            &self.image_url
        }
    }
}
