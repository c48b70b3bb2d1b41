//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Checkout was requested for an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// The catalog resource could not be fetched or read.
    #[cfg(feature = "runtime")]
    #[error(transparent)]
    CatalogLoad(#[from] quickshop_data::FetchError),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
