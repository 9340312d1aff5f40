//! Catalog domain module.
//!
//! This crate owns the product model, payload validation, the immutable
//! per-load [`Catalog`], the pure category filter, and the async
//! [`CatalogLoader`] that fetches the catalog from its configured source.
//! The catalog is replaced wholesale on every successful load and never
//! mutated in place.

pub mod catalog;
pub mod category;
pub mod filter;
pub mod loader;
pub mod product;

pub use catalog::Catalog;
pub use category::{CATEGORIES, CATEGORY_ALL, Category};
pub use filter::filter;
pub use loader::{CatalogLoader, parse_catalog};
pub use product::{Product, RawProduct};
