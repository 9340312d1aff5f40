//! The per-load, immutable product catalog.

use std::collections::HashMap;
use std::sync::Arc;

use arcano_core::{CatalogError, CatalogResult, ProductId};

use crate::product::{Product, RawProduct};

/// An immutable catalog built from one successful load.
///
/// Products keep their source order; lookups go through an id index built at
/// construction. Replacing the catalog means building a new `Catalog` and
/// swapping it wholesale, never mutating an existing one. Cart entries hold
/// `Arc<Product>` handles, so a replaced catalog's products stay alive for
/// as long as something references them.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Arc<Product>>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// An empty catalog (nothing loaded yet).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a catalog from validated products.
    ///
    /// Fails on duplicate ids: uniqueness is a per-load invariant, and a
    /// load is all-or-nothing.
    pub fn from_products(products: Vec<Product>) -> CatalogResult<Self> {
        let mut by_id = HashMap::with_capacity(products.len());
        let products: Vec<Arc<Product>> = products.into_iter().map(Arc::new).collect();
        for (index, product) in products.iter().enumerate() {
            if by_id.insert(product.id.clone(), index).is_some() {
                return Err(CatalogError::malformed(format!(
                    "duplicate product id '{}'",
                    product.id
                )));
            }
        }
        Ok(Self { products, by_id })
    }

    /// Validate raw wire records into a catalog, rejecting the whole load on
    /// the first bad record.
    pub fn from_raw(raw: Vec<RawProduct>) -> CatalogResult<Self> {
        let products = raw
            .into_iter()
            .map(Product::validate)
            .collect::<CatalogResult<Vec<_>>>()?;
        Self::from_products(products)
    }

    pub fn get(&self, id: &ProductId) -> Option<&Arc<Product>> {
        self.by_id.get(id).map(|&index| &self.products[index])
    }

    /// Products in source order.
    pub fn products(&self) -> &[Arc<Product>] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price: u64) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_uppercase(),
            price,
            category: "figuras-3d".to_owned(),
            image: String::new(),
            description: None,
            size: None,
            tag: None,
        }
    }

    #[test]
    fn preserves_source_order() {
        let catalog =
            Catalog::from_products(vec![product("b", 1), product("a", 2), product("c", 3)])
                .unwrap();
        let ids: Vec<&str> = catalog
            .products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::from_products(vec![product("a", 100)]).unwrap();
        assert_eq!(catalog.get(&ProductId::new("a")).unwrap().price, 100);
        assert!(catalog.get(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn duplicate_ids_reject_the_whole_load() {
        let err =
            Catalog::from_products(vec![product("a", 1), product("a", 2)]).unwrap_err();
        match err {
            CatalogError::Malformed(msg) => assert!(msg.contains("duplicate")),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn empty_catalog_has_no_products() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
    }
}
