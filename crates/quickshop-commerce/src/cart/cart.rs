//! Cart and cart item types.

use crate::cart::{CartPricing, LineItemPricing};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// A shopping cart.
///
/// Items are keyed by product ID and kept in the order they were first
/// added. Every item has a quantity of at least 1; operations that would
/// leave a line at 0 remove it instead.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
pub struct Cart {
    items: Vec<CartItem>,
    currency: Currency,
}

impl Cart {
    /// Create an empty cart that totals in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of a product.
    ///
    /// Bumps the quantity of an existing line, or appends a new line with
    /// quantity 1.
    pub fn add(&mut self, product: &Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            tracing::debug!(product_id = %product.id, quantity = existing.quantity, "cart line incremented");
            return;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity: 1,
        });
        tracing::debug!(product_id = %product.id, "cart line added");
    }

    /// Set the quantity of a line.
    ///
    /// Negative quantities are treated as 0, and a line at 0 is removed.
    /// Returns `false` if the product is not in the cart.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        let quantity = quantity.max(0);
        let Some(item) = self.items.iter_mut().find(|i| &i.product.id == product_id) else {
            return false;
        };

        item.quantity = quantity;
        self.items.retain(|i| i.quantity > 0);
        tracing::debug!(product_id = %product_id, quantity, "cart quantity set");
        true
    }

    /// Add one to a line's quantity.
    pub fn increment(&mut self, product_id: &ProductId) -> bool {
        match self.quantity_of(product_id) {
            Some(q) => self.set_quantity(product_id, q.saturating_add(1)),
            None => false,
        }
    }

    /// Take one from a line's quantity, stopping at 1.
    ///
    /// Dropping a line needs [`Cart::remove`] or an explicit
    /// [`Cart::set_quantity`] to 0.
    pub fn decrement(&mut self, product_id: &ProductId) -> bool {
        match self.quantity_of(product_id) {
            Some(q) => self.set_quantity(product_id, (q - 1).max(1)),
            None => false,
        }
    }

    /// Remove a line regardless of quantity. Returns `false` if it was absent.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.product.id != product_id);
        let removed = self.items.len() < len_before;
        if removed {
            tracing::debug!(product_id = %product_id, "cart line removed");
        }
        removed
    }

    /// Lines in the order they were added.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Get a line by product ID.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    /// Quantity of a product, if it is in the cart.
    pub fn quantity_of(&self, product_id: &ProductId) -> Option<i64> {
        self.get(product_id).map(|i| i.quantity)
    }

    /// Total item count (sum of quantities), as shown on the cart badge.
    pub fn item_count(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The currency totals are computed in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Sum of price times quantity over all lines.
    pub fn total(&self) -> Result<Money, CommerceError> {
        Ok(self.calculate_pricing()?.grand_total)
    }

    /// Calculate per-line and grand totals.
    ///
    /// Returns an error on arithmetic overflow or when a product is priced
    /// in a different currency than the cart.
    pub fn calculate_pricing(&self) -> Result<CartPricing, CommerceError> {
        let line_items = self
            .items
            .iter()
            .map(|item| {
                if item.product.price.currency != self.currency {
                    return Err(CommerceError::CurrencyMismatch {
                        expected: self.currency.code().to_string(),
                        got: item.product.price.currency.code().to_string(),
                    });
                }
                Ok(LineItemPricing {
                    product_id: item.product.id.clone(),
                    name: item.product.name.clone(),
                    unit_price: item.product.price,
                    quantity: item.quantity,
                    total: item.line_total()?,
                })
            })
            .collect::<Result<Vec<_>, CommerceError>>()?;

        let grand_total = Money::try_sum(line_items.iter().map(|l| &l.total), self.currency)
            .ok_or(CommerceError::Overflow)?;

        Ok(CartPricing {
            line_items,
            grand_total,
        })
    }
}

/// A product in the cart with its quantity.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartItem {
    /// The product, as it was when added.
    pub product: Product,
    /// Quantity, always at least 1 while the line is in a cart.
    pub quantity: i64,
}

impl CartItem {
    /// Unit price times quantity.
    pub fn line_total(&self) -> Result<Money, CommerceError> {
        self.product
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, format!("Product {}", id), "General", Money::from_cents(cents, Currency::USD))
    }

    fn id(s: &str) -> ProductId {
        ProductId::new(s)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::USD);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total().unwrap().is_zero());
    }

    #[test]
    fn test_add_same_product_accumulates() {
        let mut cart = Cart::new(Currency::USD);
        let apple = product("apple", 100);
        for _ in 0..5 {
            cart.add(&apple);
        }

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(&id("apple")), Some(5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_add_preserves_order() {
        let mut cart = Cart::new(Currency::USD);
        cart.add(&product("a", 100));
        cart.add(&product("b", 100));
        cart.add(&product("a", 100));
        cart.add(&product("c", 100));

        let order: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new(Currency::USD);
        cart.add(&product("a", 100));

        assert!(cart.set_quantity(&id("a"), 7));
        assert_eq!(cart.item_count(), 7);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new(Currency::USD);
        cart.add(&product("a", 100));
        cart.add(&product("b", 100));

        assert!(cart.set_quantity(&id("a"), 0));
        assert!(cart.get(&id("a")).is_none());
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_set_quantity_negative_acts_like_zero() {
        let mut zeroed = Cart::new(Currency::USD);
        zeroed.add(&product("a", 100));
        zeroed.set_quantity(&id("a"), 0);

        let mut negative = Cart::new(Currency::USD);
        negative.add(&product("a", 100));
        negative.set_quantity(&id("a"), -3);

        assert_eq!(zeroed, negative);
        assert!(negative.is_empty());
    }

    #[test]
    fn test_set_quantity_absent_is_noop() {
        let mut cart = Cart::new(Currency::USD);
        cart.add(&product("a", 100));
        let before = cart.clone();

        assert!(!cart.set_quantity(&id("missing"), 4));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut cart = Cart::new(Currency::USD);
        cart.add(&product("a", 100));
        cart.add(&product("a", 100));

        assert!(cart.remove(&id("a")));
        assert!(!cart.remove(&id("a")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut cart = Cart::new(Currency::USD);
        cart.add(&product("a", 100));

        assert!(cart.increment(&id("a")));
        assert_eq!(cart.quantity_of(&id("a")), Some(2));

        assert!(cart.decrement(&id("a")));
        assert!(cart.decrement(&id("a")));
        // Decrement stops at 1 instead of removing the line.
        assert_eq!(cart.quantity_of(&id("a")), Some(1));

        assert!(!cart.increment(&id("missing")));
        assert!(!cart.decrement(&id("missing")));
    }

    #[test]
    fn test_item_count_tracks_every_operation() {
        let mut cart = Cart::new(Currency::USD);
        let check = |cart: &Cart| {
            let sum: i64 = cart.items().iter().map(|i| i.quantity).sum();
            assert_eq!(cart.item_count(), sum);
            assert!(cart.items().iter().all(|i| i.quantity >= 1));
        };

        cart.add(&product("a", 100));
        check(&cart);
        cart.add(&product("b", 100));
        cart.add(&product("b", 100));
        check(&cart);
        cart.set_quantity(&id("a"), 10);
        check(&cart);
        cart.set_quantity(&id("b"), -1);
        check(&cart);
        cart.increment(&id("a"));
        cart.decrement(&id("a"));
        check(&cart);
        cart.remove(&id("a"));
        check(&cart);
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_pricing() {
        let mut cart = Cart::new(Currency::USD);
        let a = product("a", 250);
        for _ in 0..3 {
            cart.add(&a);
        }
        cart.add(&product("b", 100));

        let pricing = cart.calculate_pricing().unwrap();
        assert_eq!(pricing.line_items[0].total, Money::from_cents(750, Currency::USD));
        assert_eq!(pricing.line_items[1].total, Money::from_cents(100, Currency::USD));
        assert_eq!(pricing.grand_total.display_amount(), "8.50");
    }

    #[test]
    fn test_pricing_multiplies_before_rounding() {
        let mut cart = Cart::new(Currency::USD);
        let bolt = Product::new(
            "bolt",
            "Bolt",
            "Hardware",
            Money::new(Decimal::new(125, 3), Currency::USD),
        );
        cart.add(&bolt);
        cart.set_quantity(&id("bolt"), 2);

        let pricing = cart.calculate_pricing().unwrap();
        assert_eq!(pricing.grand_total.display_amount(), "0.25");
        assert_eq!(pricing.line_items[0].summary_line(), "Bolt - 2 x $0.13 = $0.25");
    }

    #[test]
    fn test_pricing_two_places_in_any_currency() {
        let mut cart = Cart::new(Currency::CLP);
        let a = Product::new("a", "A", "General", Money::from_cents(250, Currency::CLP));
        let b = Product::new("b", "B", "General", Money::from_cents(100, Currency::CLP));
        cart.add(&a);
        cart.set_quantity(&id("a"), 3);
        cart.add(&b);

        let pricing = cart.calculate_pricing().unwrap();
        assert_eq!(pricing.grand_total.display_amount(), "8.50");
        assert_eq!(pricing.line_items[0].summary_line(), "A - 3 x $2.50 = $7.50");
    }

    #[test]
    fn test_pricing_overflow() {
        let mut cart = Cart::new(Currency::USD);
        let huge = Product::new("a", "Huge", "General", Money::new(Decimal::MAX, Currency::USD));
        cart.add(&huge);
        cart.set_quantity(&id("a"), 3);

        assert!(matches!(cart.total(), Err(CommerceError::Overflow)));
    }

    #[test]
    fn test_pricing_currency_mismatch() {
        let mut cart = Cart::new(Currency::USD);
        let euro = Product::new("e", "Croissant", "Bakery", Money::from_cents(200, Currency::EUR));
        cart.add(&euro);

        assert!(matches!(
            cart.calculate_pricing(),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }
}
