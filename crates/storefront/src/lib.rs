//! `arcano-storefront` — service facade over the cart core.
//!
//! Wires the catalog loader, the cart store, and checkout behind one
//! configured entry point. This is the surface the (external) view layer
//! talks to: load the catalog, filter it, mutate the cart, and read off the
//! checkout deep link. No rendering concerns live here.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use arcano_cart::CartStore;
use arcano_catalog::{CatalogLoader, Product, filter};
use arcano_checkout::{DeepLinkConfig, OrderMessage};
use arcano_core::{CatalogResult, CurrencyFormatter};

/// Storefront configuration: where the catalog lives, where orders go, and
/// how prices render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    pub catalog_url: String,
    pub deep_link: DeepLinkConfig,
    pub formatter: CurrencyFormatter,
}

impl StorefrontConfig {
    pub fn new(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            deep_link: DeepLinkConfig::default(),
            formatter: CurrencyFormatter::default(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self::new("http://127.0.0.1:8080/products.json")
    }
}

/// The assembled storefront core.
pub struct Storefront {
    config: StorefrontConfig,
    loader: CatalogLoader,
    cart: CartStore,
}

impl Storefront {
    pub fn new(config: StorefrontConfig) -> Self {
        let loader = CatalogLoader::new(config.catalog_url.clone());
        Self {
            config,
            loader,
            cart: CartStore::empty(),
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Mutable access for cart operations and hook registration.
    pub fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Fetch the catalog and replace the cart's view of it wholesale.
    ///
    /// On failure the previous catalog (and the cart) stay untouched; the
    /// typed error is the caller's to surface.
    pub async fn load_catalog(&mut self) -> CatalogResult<()> {
        let catalog = self.loader.load().await?;
        info!(products = catalog.len(), "catalog replaced");
        self.cart.replace_catalog(catalog);
        Ok(())
    }

    /// Products visible under a category, for the view layer to render.
    pub fn filtered(&self, category_id: &str) -> Vec<Arc<Product>> {
        filter(self.cart.catalog(), category_id)
    }

    /// Deep link carrying the current cart as a pre-filled order message.
    pub fn checkout_url(&self) -> String {
        let message = OrderMessage::from_cart(self.cart.entries(), self.cart.summarize())
            .render(&self.config.formatter);
        self.config.deep_link.order_url(&message)
    }

    /// Deep link for the fixed catalog inquiry.
    pub fn contact_url(&self) -> String {
        self.config.deep_link.contact_url()
    }
}
