//! Product records: wire format vs validated domain type.

use serde::{Deserialize, Serialize};

use arcano_core::money::centavos_from_major;
use arcano_core::{CatalogError, CatalogResult, Centavos, ProductId};

/// Product record as it appears on the wire, before validation.
///
/// Every field is optional here so one bad record produces a precise
/// validation error instead of failing the whole JSON decode opaquely.
#[derive(Debug, Clone, Deserialize)]
pub struct RawProduct {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Validated product. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (centavos).
    pub price: Centavos,
    pub category: String,
    /// Image URI; may be unreachable, display-only.
    pub image: String,
    pub description: Option<String>,
    pub size: Option<String>,
    /// Display-only badge text.
    pub tag: Option<String>,
}

impl Product {
    /// Validate a wire record into a domain product.
    ///
    /// Rejects missing/empty `id` or `name` and missing, negative, or
    /// non-finite prices. Prices arrive in major units and are converted
    /// to centavos.
    pub fn validate(raw: RawProduct) -> CatalogResult<Self> {
        let id = match raw.id {
            Some(id) if !id.trim().is_empty() => ProductId::new(id),
            _ => return Err(CatalogError::malformed("product record missing id")),
        };
        let name = match raw.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => {
                return Err(CatalogError::malformed(format!(
                    "product '{id}' missing name"
                )));
            }
        };
        let price = raw
            .price
            .and_then(centavos_from_major)
            .ok_or_else(|| {
                CatalogError::malformed(format!("product '{id}' has invalid price"))
            })?;

        Ok(Self {
            id,
            name,
            price,
            category: raw.category.unwrap_or_default(),
            image: raw.image.unwrap_or_default(),
            description: raw.description,
            size: raw.size,
            tag: raw.tag,
        })
    }
}
