//! Storefront domain types and logic for Quickshop.
//!
//! This crate provides the pieces of a small, client-side storefront:
//!
//! - **Catalog**: Products, the category toolbar, and the one-shot loader
//! - **Search**: Category and text filters deriving the visible products
//! - **Cart**: Quantities per product, totals, and pricing
//! - **Checkout**: The order message and the hand-off link that carries it
//! - **Session**: One owner for all of the above, with debounced search
//!
//! # Example
//!
//! ```rust,ignore
//! use quickshop_commerce::prelude::*;
//!
//! let composer = CheckoutComposer::new("Corner Shop", HandoffLink::new("15550001111"));
//! let mut session = StoreSession::new(composer, Currency::USD, DEFAULT_SEARCH_DELAY);
//! session.load(&loader).await;
//!
//! session.add_to_cart(&ProductId::new("1"))?;
//! if let Some(checkout) = session.checkout(&opener)? {
//!     println!("{}", checkout.summary.message);
//! }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

#[cfg(feature = "runtime")]
pub mod debounce;
#[cfg(feature = "runtime")]
pub mod session;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        category_set, Catalog, CatalogStatus, CategoryFilter, Product, ProductRecord,
        ALL_CATEGORIES,
    };
    #[cfg(feature = "runtime")]
    pub use crate::catalog::CatalogLoader;

    // Cart
    pub use crate::cart::{Cart, CartItem, CartPricing, LineItemPricing};

    // Checkout
    pub use crate::checkout::{
        Checkout, CheckoutComposer, HandoffLink, LinkOpener, MessageTemplate, OrderSummary,
    };

    // Search
    pub use crate::search::{Filter, SearchQuery};

    #[cfg(feature = "runtime")]
    pub use crate::debounce::{Debouncer, DEFAULT_SEARCH_DELAY};
    #[cfg(feature = "runtime")]
    pub use crate::session::StoreSession;
}
