//! Product catalog module.
//!
//! Contains product types, the category toolbar, load state and the loader.

mod category;
#[cfg(feature = "runtime")]
mod loader;
mod product;
mod status;

pub use category::{category_set, CategoryFilter, ALL_CATEGORIES};
#[cfg(feature = "runtime")]
pub use loader::{CatalogLoader, LOAD_FAILED_PREFIX};
pub use product::{Product, ProductRecord};
pub use status::{Catalog, CatalogStatus};
