//! Pure category filtering over a catalog.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::category::CATEGORY_ALL;
use crate::product::Product;

/// Select the products visible under a category.
///
/// The [`CATEGORY_ALL`] sentinel returns the whole catalog; anything else
/// returns the order-preserving subsequence whose `category` matches. An
/// empty result is a valid answer (distinguishing it from "not loaded yet"
/// is the caller's concern).
pub fn filter(catalog: &Catalog, category_id: &str) -> Vec<Arc<Product>> {
    if category_id == CATEGORY_ALL {
        return catalog.products().to_vec();
    }
    catalog
        .products()
        .iter()
        .filter(|p| p.category == category_id)
        .cloned()
        .collect()
}
