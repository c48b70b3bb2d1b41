//! Search query builder.

use crate::catalog::{CategoryFilter, Product};
use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// The shopper's current view: a category selection plus search text.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchQuery {
    /// Selected category.
    pub category: CategoryFilter,
    /// Search text (already debounced).
    pub text: String,
}

impl SearchQuery {
    /// Create a query that matches every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category selection.
    pub fn with_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the search text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The active filters; no-op filters are left out.
    pub fn filters(&self) -> Vec<Filter> {
        [
            Filter::Category(self.category.clone()),
            Filter::Text(self.text.clone()),
        ]
        .into_iter()
        .filter(|f| !f.is_noop())
        .collect()
    }

    /// Check whether a product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters().iter().all(|f| f.matches(product))
    }

    /// The visible subset of `products`, in their original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let filters = self.filters();
        products
            .iter()
            .filter(|p| filters.iter().all(|f| f.matches(p)))
            .collect()
    }
}
