//! Async catalog loading from the configured source.

use chrono::Utc;
use tracing::{debug, warn};

use arcano_core::{CatalogError, CatalogResult};

use crate::catalog::Catalog;
use crate::product::RawProduct;

/// Fetches and validates the product catalog.
///
/// A successful `load()` yields a fresh, fully validated [`Catalog`]; any
/// failure leaves the caller's current catalog untouched. Concurrent loads
/// need no coordination here: each call returns its own value and the
/// caller replaces wholesale, so the last replacement wins.
pub struct CatalogLoader {
    url: String,
    client: reqwest::Client,
}

impl CatalogLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch, decode, and validate the catalog. All-or-nothing.
    pub async fn load(&self) -> CatalogResult<Catalog> {
        // Cache-bust so a stale intermediary never serves an old catalog.
        let url = format!("{}?_={}", self.url, Utc::now().timestamp_millis());
        debug!(url = %self.url, "loading catalog");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "catalog source returned non-success");
            return Err(CatalogError::Status(status.as_u16()));
        }

        let raw: Vec<RawProduct> = resp
            .json()
            .await
            .map_err(|e| CatalogError::malformed(e.to_string()))?;

        let catalog = Catalog::from_raw(raw)?;
        debug!(products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

/// Decode and validate a catalog from a JSON string.
///
/// Same validation path as [`CatalogLoader::load`]; used for fixtures and
/// for sources that hand over the payload directly.
pub fn parse_catalog(json: &str) -> CatalogResult<Catalog> {
    let raw: Vec<RawProduct> =
        serde_json::from_str(json).map_err(|e| CatalogError::malformed(e.to_string()))?;
    Catalog::from_raw(raw)
}
