//! Search module.
//!
//! Contains the product filters and the query that derives the visible
//! product list.

mod filter;
mod query;

pub use filter::Filter;
pub use query::SearchQuery;
