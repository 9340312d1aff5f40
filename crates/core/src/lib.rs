//! `arcano-core` — shared storefront primitives.
//!
//! This crate contains **pure domain** building blocks (no IO, no HTTP):
//! typed identifiers, money representation and formatting, and the error
//! taxonomy shared by the catalog and cart crates.

pub mod error;
pub mod id;
pub mod money;

pub use error::{CartError, CartResult, CatalogError, CatalogResult};
pub use id::ProductId;
pub use money::{Centavos, CurrencyFormatter};
