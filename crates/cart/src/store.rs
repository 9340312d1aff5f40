//! The cart store: the storefront's single mutable state holder.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use arcano_catalog::{Catalog, Product};
use arcano_core::{CartError, CartResult, Centavos, ProductId};

use crate::hooks::ChangeHooks;

/// One chosen product and how many of it.
///
/// The entry shares the catalog's product (never copies or mutates it).
/// Quantity is ≥ 1 by construction: an entry that would drop to zero is
/// removed instead.
#[derive(Debug, Clone)]
pub struct CartEntry {
    pub product: Arc<Product>,
    pub quantity: u32,
}

impl CartEntry {
    pub fn line_total(&self) -> Centavos {
        self.product.price * self.quantity as u64
    }
}

/// Derived aggregates over the current entries. Never stored, always
/// recomputed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    pub item_count: u64,
    /// Grand total in centavos.
    pub total: Centavos,
}

/// Owns the cart entries and the catalog they resolve against.
///
/// All operations are synchronous and atomic on the calling thread: each
/// either completes fully or leaves state unchanged, and change hooks only
/// ever observe fully-applied state. Entries keep insertion order, which is
/// the order checkout serializes them in.
pub struct CartStore {
    catalog: Catalog,
    entries: Vec<CartEntry>,
    hooks: ChangeHooks,
}

impl CartStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            entries: Vec::new(),
            hooks: ChangeHooks::new(),
        }
    }

    /// A store with nothing loaded yet; every add resolves to not-found.
    pub fn empty() -> Self {
        Self::new(Catalog::empty())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Register a change callback; fired after every mutation, in
    /// registration order.
    pub fn on_change(&mut self, callback: impl Fn(&CartSummary, &[CartEntry]) + 'static) {
        self.hooks.register(callback);
    }

    /// Add one unit of a product, creating the entry at quantity 1 or
    /// incrementing an existing one.
    ///
    /// An id absent from the current catalog is a recoverable no-op: state
    /// is untouched, no notification fires, and the error is returned for
    /// observation.
    pub fn add_item(&mut self, id: &ProductId) -> CartResult<()> {
        let Some(product) = self.catalog.get(id) else {
            warn!(product = %id, "add_item: product not in catalog");
            return Err(CartError::ProductNotFound(id.clone()));
        };

        match self.position(id) {
            Some(index) => self.entries[index].quantity += 1,
            None => self.entries.push(CartEntry {
                product: Arc::clone(product),
                quantity: 1,
            }),
        }
        debug!(product = %id, "add_item");
        self.notify();
        Ok(())
    }

    /// Adjust an entry's quantity by `delta` (may be negative). A result at
    /// or below zero removes the entry. No entry, no-op.
    pub fn change_quantity(&mut self, id: &ProductId, delta: i64) {
        if let Some(index) = self.position(id) {
            let next = self.entries[index].quantity as i64 + delta;
            if next <= 0 {
                self.entries.remove(index);
                debug!(product = %id, "change_quantity: entry removed");
            } else {
                self.entries[index].quantity = next.min(u32::MAX as i64) as u32;
                debug!(product = %id, quantity = next, "change_quantity");
            }
        }
        self.notify();
    }

    /// Remove an entry if present; absent ids are a silent no-op.
    pub fn remove_item(&mut self, id: &ProductId) {
        if let Some(index) = self.position(id) {
            self.entries.remove(index);
            debug!(product = %id, "remove_item");
        }
        self.notify();
    }

    /// Empty the cart in one step.
    pub fn clear(&mut self) {
        self.entries.clear();
        debug!("cart cleared");
        self.notify();
    }

    /// Recompute item count and total from the current entries.
    pub fn summarize(&self) -> CartSummary {
        let mut summary = CartSummary::default();
        for entry in &self.entries {
            summary.item_count += entry.quantity as u64;
            summary.total += entry.line_total();
        }
        summary
    }

    /// Replace the catalog wholesale and re-resolve the cart against it.
    ///
    /// Entries whose id survives adopt the new catalog's product (fresh
    /// price/name); entries whose id vanished are dropped. The summary and
    /// the checkout message therefore never quote a product the current
    /// catalog does not carry.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
        let before = self.entries.len();
        let catalog = &self.catalog;
        self.entries.retain_mut(|entry| {
            match catalog.get(&entry.product.id) {
                Some(product) => {
                    entry.product = Arc::clone(product);
                    true
                }
                None => false,
            }
        });
        if self.entries.len() < before {
            debug!(
                dropped = before - self.entries.len(),
                "replace_catalog: dropped entries no longer in catalog"
            );
        }
        self.notify();
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.entries.iter().position(|e| &e.product.id == id)
    }

    fn notify(&self) {
        let summary = self.summarize();
        self.hooks.notify(&summary, &self.entries);
    }
}

impl core::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CartStore")
            .field("entries", &self.entries)
            .field("hooks", &self.hooks)
            .finish()
    }
}
