//! Cart pricing calculations.

use crate::ids::ProductId;
use crate::money::Money;
use serde::Serialize;

/// Pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartPricing {
    /// Per-line breakdown, in cart order.
    pub line_items: Vec<LineItemPricing>,
    /// Sum of all line totals.
    pub grand_total: Money,
}

/// Pricing for a single cart line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LineItemPricing {
    /// Product ID.
    pub product_id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: i64,
    /// unit_price * quantity.
    pub total: Money,
}

impl LineItemPricing {
    /// Render as `name - qty x unit = total`.
    pub fn summary_line(&self) -> String {
        format!(
            "{} - {} x {} = {}",
            self.name,
            self.quantity,
            self.unit_price.display(),
            self.total.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_summary_line() {
        let line = LineItemPricing {
            product_id: ProductId::new("1"),
            name: "Coffee".to_string(),
            unit_price: Money::from_cents(250, Currency::USD),
            quantity: 3,
            total: Money::from_cents(750, Currency::USD),
        };
        assert_eq!(line.summary_line(), "Coffee - 3 x $2.50 = $7.50");
    }
}
