//! Order message composition.

use crate::cart::CartPricing;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Placeholder replaced by the store name in the greeting.
pub const STORE_PLACEHOLDER: &str = "{store}";

/// Wording of the order message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageTemplate {
    /// First line; `{store}` is replaced with the store name.
    pub greeting: String,
    /// Label printed before the order total.
    pub total_label: String,
    /// Last line.
    pub closing: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            greeting: "Hello {store}! I would like to place the following order:".to_string(),
            total_label: "Order total:".to_string(),
            closing: "Thank you!".to_string(),
        }
    }
}

impl MessageTemplate {
    /// The greeting with the store name filled in.
    pub fn greeting_for(&self, store_name: &str) -> String {
        self.greeting.replace(STORE_PLACEHOLDER, store_name)
    }
}

/// A rendered order, ready to hand off.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrderSummary {
    /// One `name - qty x unit = total` line per cart line.
    pub lines: Vec<String>,
    /// Cart total.
    pub total: Money,
    /// The full multi-line message.
    pub message: String,
}

impl OrderSummary {
    /// Render a priced cart.
    pub fn render(pricing: &CartPricing, store_name: &str, template: &MessageTemplate) -> Self {
        let lines: Vec<String> = pricing
            .line_items
            .iter()
            .map(|line| line.summary_line())
            .collect();

        let mut message = format!("{}\n\n", template.greeting_for(store_name));
        for line in &lines {
            message.push_str(line);
            message.push('\n');
        }
        message.push_str(&format!(
            "\n{} {}\n\n",
            template.total_label,
            pricing.grand_total.display()
        ));
        message.push_str(&template.closing);

        Self {
            lines,
            total: pricing.grand_total,
            message,
        }
    }
}
