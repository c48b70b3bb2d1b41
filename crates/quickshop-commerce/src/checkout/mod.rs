//! Checkout module.
//!
//! Contains order message composition and the hand-off link.

mod composer;
mod handoff;
mod order;

pub use composer::{Checkout, CheckoutComposer};
pub use handoff::{HandoffLink, LinkOpener, DEFAULT_HANDOFF_BASE};
pub use order::{MessageTemplate, OrderSummary, STORE_PLACEHOLDER};
