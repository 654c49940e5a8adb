//! Catalog source backed by an in-memory set of product configurations,
//! usually loaded from the YAML catalog file.

use std::collections::HashMap;
use std::path::Path;

use bottles_core::{load_catalog_file, ProductConfig};

use crate::error::CatalogError;
use crate::source::CatalogSource;

#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    products: HashMap<String, ProductConfig>,
}

impl FixtureCatalog {
    /// Loads and validates a YAML catalog file.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Fixture`] if the file cannot be read, parsed or
    /// resolved.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let configs = load_catalog_file(path)?;
        tracing::info!(path = %path.display(), products = configs.len(), "loaded fixture catalog");
        Ok(Self::from_configs(configs))
    }

    /// Builds a catalog from already-resolved configurations. Later entries
    /// replace earlier ones with the same id.
    #[must_use]
    pub fn from_configs(configs: impl IntoIterator<Item = ProductConfig>) -> Self {
        Self {
            products: configs.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    /// Product ids in sorted order.
    #[must_use]
    pub fn product_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.products.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl CatalogSource for FixtureCatalog {
    async fn fetch_product_config(&self, product_id: &str) -> Result<ProductConfig, CatalogError> {
        self.products
            .get(product_id)
            .cloned()
            .ok_or_else(|| CatalogError::ProductNotFound {
                product_id: product_id.to_owned(),
            })
    }
}
