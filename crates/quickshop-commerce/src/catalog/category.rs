//! Category selection and the category toolbar.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Label of the sentinel category that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// The category a shopper has selected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// No category filter.
    #[default]
    All,
    /// Only products whose category equals this name exactly.
    Named(String),
}

impl CategoryFilter {
    /// Select a named category.
    pub fn named(name: impl Into<String>) -> Self {
        CategoryFilter::Named(name.into())
    }

    /// Parse a toolbar label. The sentinel label maps to [`CategoryFilter::All`].
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label.to_string())
        }
    }

    /// The label shown on the toolbar.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Check if this is the sentinel.
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Check whether a product category passes this selection.
    pub fn admits(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        CategoryFilter::from_label(label)
    }
}

/// The category toolbar: the sentinel first, then each distinct product
/// category in first-seen order.
pub fn category_set(products: &[Product]) -> Vec<CategoryFilter> {
    let mut seen = HashSet::new();
    let mut categories = vec![CategoryFilter::All];
    for product in products {
        if seen.insert(product.category.as_str()) {
            categories.push(CategoryFilter::Named(product.category.clone()));
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, category: &str) -> Product {
        Product::new(id, format!("Product {}", id), category, Money::from_cents(100, Currency::USD))
    }

    #[test]
    fn test_category_set_first_seen_order() {
        let products = vec![
            product("1", "Drinks"),
            product("2", "Snacks"),
            product("3", "Drinks"),
            product("4", "Bakery"),
        ];
        let labels: Vec<String> = category_set(&products)
            .iter()
            .map(|c| c.label().to_string())
            .collect();
        assert_eq!(labels, vec!["All", "Drinks", "Snacks", "Bakery"]);
    }

    #[test]
    fn test_category_set_empty_catalog() {
        assert_eq!(category_set(&[]), vec![CategoryFilter::All]);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(CategoryFilter::from_label("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_label("Drinks"), CategoryFilter::named("Drinks"));
        // Labels are matched exactly.
        assert_eq!(CategoryFilter::from_label("all"), CategoryFilter::named("all"));
    }

    #[test]
    fn test_admits() {
        assert!(CategoryFilter::All.admits("anything"));
        assert!(CategoryFilter::named("A").admits("A"));
        assert!(!CategoryFilter::named("A").admits("a"));
        assert!(!CategoryFilter::named("A").admits("B"));
    }
}
