//! Query modules for the catalog SDK.
//!
//! Each module provides a query struct that borrows the SDK's sources and
//! exposes methods returning typed models.

pub mod catalog;
pub mod details;

pub use catalog::{CatalogQuery, Category};
pub use details::DetailQuery;
