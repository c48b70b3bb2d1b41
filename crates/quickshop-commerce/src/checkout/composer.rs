//! Checkout composition.

use crate::cart::Cart;
use crate::checkout::{HandoffLink, LinkOpener, MessageTemplate, OrderSummary};
use crate::error::CommerceError;
use serde::Serialize;

/// Turns a cart into an order message and a hand-off link.
#[derive(Debug, Clone)]
pub struct CheckoutComposer {
    store_name: String,
    link: HandoffLink,
    template: MessageTemplate,
}

impl CheckoutComposer {
    /// Create a composer with the default message wording.
    pub fn new(store_name: impl Into<String>, link: HandoffLink) -> Self {
        Self {
            store_name: store_name.into(),
            link,
            template: MessageTemplate::default(),
        }
    }

    /// Use different message wording.
    pub fn with_template(mut self, template: MessageTemplate) -> Self {
        self.template = template;
        self
    }

    /// The store name used in the greeting.
    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    /// Compose the checkout for a non-empty cart.
    pub fn compose(&self, cart: &Cart) -> Result<Checkout, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }

        let pricing = cart.calculate_pricing()?;
        let summary = OrderSummary::render(&pricing, &self.store_name, &self.template);
        let url = self.link.url_for(&summary.message);

        tracing::info!(
            lines = summary.lines.len(),
            total = %summary.total,
            "checkout composed"
        );

        Ok(Checkout { summary, url })
    }
}

/// A composed checkout.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Checkout {
    /// The rendered order.
    pub summary: OrderSummary,
    /// The hand-off link carrying the order message.
    pub url: String,
}

impl Checkout {
    /// Hand the link to `opener`. Failures are logged and dropped.
    pub fn hand_off(&self, opener: &dyn LinkOpener) {
        if let Err(e) = opener.open(&self.url) {
            tracing::warn!(error = %e, "failed to open checkout link");
        }
    }
}
