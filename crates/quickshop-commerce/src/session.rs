//! The shopper's session: the single owner of catalog, cart and view state.

use crate::cart::Cart;
use crate::catalog::{CatalogLoader, CatalogStatus, CategoryFilter, Product};
use crate::checkout::{Checkout, CheckoutComposer, LinkOpener};
use crate::debounce::Debouncer;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;
use crate::search::SearchQuery;
use std::time::Duration;

/// A storefront session.
///
/// Everything the shopper sees is derived on demand from the state held
/// here; nothing derived is cached.
#[derive(Debug)]
pub struct StoreSession {
    catalog: CatalogStatus,
    cart: Cart,
    category: CategoryFilter,
    search: Debouncer<String>,
    composer: CheckoutComposer,
}

impl StoreSession {
    /// Start a session in the loading state with an empty cart.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(composer: CheckoutComposer, currency: Currency, search_delay: Duration) -> Self {
        Self {
            catalog: CatalogStatus::Loading,
            cart: Cart::new(currency),
            category: CategoryFilter::All,
            search: Debouncer::new(String::new(), search_delay),
            composer,
        }
    }

    /// Replace the catalog state, e.g. with one loaded elsewhere.
    pub fn with_catalog(mut self, catalog: CatalogStatus) -> Self {
        self.catalog = catalog;
        self
    }

    /// Run the one-shot catalog load.
    pub async fn load(&mut self, loader: &CatalogLoader) {
        self.catalog = CatalogStatus::Loading;
        self.catalog = loader.load().await;
    }

    /// Current catalog state.
    pub fn catalog(&self) -> &CatalogStatus {
        &self.catalog
    }

    // === View ===

    /// The category toolbar.
    pub fn categories(&self) -> Vec<CategoryFilter> {
        crate::catalog::category_set(self.catalog.products())
    }

    /// Select a category.
    pub fn select_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// The selected category.
    pub fn selected_category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Accept typed search text. It reaches the view once typing pauses.
    pub fn type_search(&mut self, text: impl Into<String>) {
        self.search.set(text.into());
    }

    /// The search text as typed.
    pub fn search_input(&self) -> &str {
        self.search.input()
    }

    /// The search text the view is filtering by.
    pub fn applied_search(&self) -> String {
        self.search.applied()
    }

    /// Wait for the next debounced search value to apply.
    pub async fn search_settled(&mut self) -> bool {
        self.search.changed().await
    }

    /// The query the view is derived from.
    pub fn query(&self) -> SearchQuery {
        SearchQuery::new()
            .with_category(self.category.clone())
            .with_text(self.applied_search())
    }

    /// Products matching the current category and applied search.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.query().apply(self.catalog.products())
    }

    // === Cart ===

    /// Add one unit of a catalog product to the cart.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Result<(), CommerceError> {
        let product = self
            .catalog
            .catalog()
            .and_then(|c| c.get(product_id))
            .ok_or_else(|| CommerceError::ProductNotFound(product_id.to_string()))?;
        self.cart.add(product);
        Ok(())
    }

    /// Set a line's quantity; 0 or less removes it.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        self.cart.set_quantity(product_id, quantity)
    }

    /// Add one to a line.
    pub fn increment(&mut self, product_id: &ProductId) -> bool {
        self.cart.increment(product_id)
    }

    /// Take one from a line, stopping at 1.
    pub fn decrement(&mut self, product_id: &ProductId) -> bool {
        self.cart.decrement(product_id)
    }

    /// Remove a line.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        self.cart.remove(product_id)
    }

    /// Cart badge count.
    pub fn item_count(&self) -> i64 {
        self.cart.item_count()
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The store name checkout greets.
    pub fn store_name(&self) -> &str {
        self.composer.store_name()
    }

    // === Checkout ===

    /// Compose the order and hand its link to `opener`.
    ///
    /// Returns `None` without touching `opener` when the cart is empty.
    pub fn checkout(&self, opener: &dyn LinkOpener) -> Result<Option<Checkout>, CommerceError> {
        if self.cart.is_empty() {
            return Ok(None);
        }
        let checkout = self.composer.compose(&self.cart)?;
        checkout.hand_off(opener);
        Ok(Some(checkout))
    }
}
