//! Shopping cart module.
//!
//! Contains the cart, its items, and pricing.

mod cart;
mod pricing;

pub use cart::{Cart, CartItem};
pub use pricing::{CartPricing, LineItemPricing};
