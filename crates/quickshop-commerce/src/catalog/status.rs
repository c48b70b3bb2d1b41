//! Catalog contents and load state.

use crate::catalog::{category_set, CategoryFilter, Product, ProductRecord};
use crate::ids::ProductId;
use crate::money::Currency;

/// The loaded product catalog. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from products, keeping their order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Build a catalog from file records priced in `currency`.
    pub fn from_records(records: Vec<ProductRecord>, currency: Currency) -> Self {
        Self::new(
            records
                .into_iter()
                .map(|r| Product::from_record(r, currency))
                .collect(),
        )
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The category toolbar for this catalog.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        category_set(&self.products)
    }
}

/// Where the one-shot catalog load stands.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogStatus {
    /// The load has not finished yet.
    #[default]
    Loading,
    /// The catalog loaded.
    Ready(Catalog),
    /// The load failed; the catalog is treated as empty.
    Failed {
        /// Human-readable reason.
        message: String,
    },
}

impl CatalogStatus {
    /// Check if the load is still pending.
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogStatus::Loading)
    }

    /// The error message, if the load failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            CatalogStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// The catalog, if loaded.
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogStatus::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    /// Loaded products, or an empty slice while loading or after a failure.
    pub fn products(&self) -> &[Product] {
        self.catalog().map(Catalog::products).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn sample() -> Catalog {
        Catalog::new(vec![
            Product::new("1", "Apple", "A", Money::from_cents(100, Currency::USD)),
            Product::new("2", "Banana", "B", Money::from_cents(50, Currency::USD)),
        ])
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = sample();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(&ProductId::new("2")).unwrap().name, "Banana");
        assert!(catalog.get(&ProductId::new("3")).is_none());
    }

    #[test]
    fn test_from_records_prices_in_currency() {
        let records: Vec<ProductRecord> = serde_json::from_str(
            r#"[{"id": 1, "name": "Taco", "category": "Food", "price": 35.5}]"#,
        )
        .unwrap();
        let catalog = Catalog::from_records(records, Currency::MXN);
        let taco = &catalog.products()[0];
        assert_eq!(taco.price, Money::from_cents(3550, Currency::MXN));
    }

    #[test]
    fn test_status_accessors() {
        let loading = CatalogStatus::Loading;
        assert!(loading.is_loading());
        assert!(loading.products().is_empty());
        assert!(loading.error().is_none());

        let failed = CatalogStatus::Failed {
            message: "Could not load products: HTTP 500 Internal Server Error".to_string(),
        };
        assert!(!failed.is_loading());
        assert!(failed.error().is_some());
        assert!(failed.products().is_empty());

        let ready = CatalogStatus::Ready(sample());
        assert!(!ready.is_loading());
        assert!(ready.error().is_none());
        assert_eq!(ready.products().len(), 2);
    }
}
