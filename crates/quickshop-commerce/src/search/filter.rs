//! Product filter predicates.

use crate::catalog::{CategoryFilter, Product};
use serde::{Deserialize, Serialize};

/// A single predicate over products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Filter by selected category.
    Category(CategoryFilter),
    /// Case-insensitive substring match on name or description.
    Text(String),
}

impl Filter {
    /// Create a category filter.
    pub fn category(selection: impl Into<CategoryFilter>) -> Self {
        Filter::Category(selection.into())
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(selection) => selection.admits(&product.category),
            Filter::Text(query) => {
                let needle = query.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
        }
    }

    /// Check if this filter lets every product through.
    pub fn is_noop(&self) -> bool {
        match self {
            Filter::Category(selection) => selection.is_all(),
            Filter::Text(query) => query.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn banana() -> Product {
        Product::new("2", "Banana", "Fruit", Money::from_cents(50, Currency::USD))
            .with_description("Ripe YELLOW bunch")
    }

    #[test]
    fn test_text_filter_matches_name_case_insensitive() {
        assert!(Filter::text("ban").matches(&banana()));
        assert!(Filter::text("BAN").matches(&banana()));
        assert!(!Filter::text("apple").matches(&banana()));
    }

    #[test]
    fn test_text_filter_matches_description() {
        assert!(Filter::text("yellow").matches(&banana()));
    }

    #[test]
    fn test_empty_text_matches_everything() {
        let filter = Filter::text("");
        assert!(filter.is_noop());
        assert!(filter.matches(&banana()));
    }

    #[test]
    fn test_text_filter_whitespace_is_literal() {
        let apples = Product::new("1", "Green Apples", "Fruit", Money::from_cents(250, Currency::USD));

        let space = Filter::text(" ");
        assert!(!space.is_noop());
        assert!(space.matches(&apples));
        assert!(!space.matches(&Product::new("3", "Kiwi", "Fruit", Money::from_cents(80, Currency::USD))));

        assert!(!Filter::text("apple ").matches(&apples));
        assert!(Filter::text("green ").matches(&apples));
    }

    #[test]
    fn test_category_filter() {
        assert!(Filter::category("Fruit").matches(&banana()));
        assert!(!Filter::category("Bakery").matches(&banana()));
        assert!(Filter::category("All").matches(&banana()));
        assert!(Filter::category("All").is_noop());
    }
}
