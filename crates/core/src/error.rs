//! Storefront error model.
//!
//! Two deliberately separate taxonomies: [`CatalogError`] is fatal to a
//! single load attempt (recoverable by retry), [`CartError`] is local and
//! recoverable (the operation becomes a no-op). Neither crosses the public
//! boundary as a panic.

use thiserror::Error;

use crate::id::ProductId;

/// Result type for catalog loading.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Result type for cart mutations.
pub type CartResult<T> = Result<T, CartError>;

/// A catalog load attempt failed. The previous catalog, if any, stays in
/// place untouched; no partial catalog is ever produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Transport-level failure (connect, DNS, timeout).
    #[error("catalog transport error: {0}")]
    Transport(String),

    /// The source answered with a non-success status.
    #[error("catalog source returned status {0}")]
    Status(u16),

    /// The payload decoded but failed validation, or did not decode at all.
    #[error("malformed catalog payload: {0}")]
    Malformed(String),
}

impl CatalogError {
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

/// A cart mutation could not be applied. State is left exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The referenced id is absent from the current catalog.
    #[error("product not found in catalog: {0}")]
    ProductNotFound(ProductId),
}
