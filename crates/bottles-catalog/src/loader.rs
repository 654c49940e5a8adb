//! The configuration loader: one fetch per product view, resolved into an
//! immutable shared snapshot.

use std::sync::Arc;

use bottles_core::{AppConfig, CatalogBackend, ProductConfig};
use thiserror::Error;

use crate::client::CatalogClient;
use crate::error::CatalogError;
use crate::fixture::FixtureCatalog;
use crate::source::CatalogSource;

/// Message shown to shoppers for any load failure.
pub const LOAD_FAILURE_MESSAGE: &str = "unable to load configuration";

/// Terminal load failure for a product view. There is no retry; the view
/// renders an error state and a new navigation triggers a new load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("product {product_id} not found")]
    NotFound { product_id: String },

    #[error("configuration for {product_id} unavailable: {reason}")]
    Unavailable { product_id: String, reason: String },
}

impl LoadError {
    #[must_use]
    pub fn product_id(&self) -> &str {
        match self {
            LoadError::NotFound { product_id } | LoadError::Unavailable { product_id, .. } => {
                product_id
            }
        }
    }

    /// User-facing text; details stay in the logs.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILURE_MESSAGE
    }
}

/// Loads the resolved configuration for `product_id` from `source`.
///
/// # Errors
///
/// Returns [`LoadError::NotFound`] when the catalog has no such product and
/// [`LoadError::Unavailable`] for every other failure (network, HTTP status,
/// malformed or unusable documents).
pub async fn load_product_config<S>(
    source: &S,
    product_id: &str,
) -> Result<Arc<ProductConfig>, LoadError>
where
    S: CatalogSource + ?Sized,
{
    match source.fetch_product_config(product_id).await {
        Ok(config) => {
            tracing::info!(
                product_id,
                glass = config.glass_options().len(),
                fitments = config.fitment_options().len(),
                caps = config.cap_options().len(),
                fused = config.is_fused(),
                "loaded product configuration"
            );
            Ok(Arc::new(config))
        }
        Err(CatalogError::ProductNotFound { product_id }) => {
            tracing::info!(product_id = %product_id, "product not found in catalog");
            Err(LoadError::NotFound { product_id })
        }
        Err(err) => {
            tracing::warn!(product_id, error = %err, "failed to load product configuration");
            Err(LoadError::Unavailable {
                product_id: product_id.to_owned(),
                reason: err.to_string(),
            })
        }
    }
}

/// The catalog selected by [`AppConfig::catalog`].
pub enum Catalog {
    Remote(CatalogClient),
    Fixture(FixtureCatalog),
}

impl Catalog {
    /// Builds the configured catalog source.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the HTTP client cannot be built or the
    /// fixture file cannot be loaded.
    pub fn from_app_config(config: &AppConfig) -> Result<Self, CatalogError> {
        match &config.catalog {
            CatalogBackend::Remote {
                base_url,
                dataset,
                api_version,
                token,
            } => Ok(Catalog::Remote(CatalogClient::new(
                base_url,
                dataset,
                api_version,
                token.as_deref(),
                config.catalog_request_timeout_secs,
                &config.catalog_user_agent,
            )?)),
            CatalogBackend::Fixture(path) => {
                Ok(Catalog::Fixture(FixtureCatalog::from_path(path)?))
            }
        }
    }

    /// Product ids, when the backend can enumerate them. The CMS query
    /// endpoint is only ever asked for one product at a time.
    #[must_use]
    pub fn product_ids(&self) -> Option<Vec<&str>> {
        match self {
            Catalog::Remote(_) => None,
            Catalog::Fixture(fixture) => Some(fixture.product_ids()),
        }
    }
}

impl CatalogSource for Catalog {
    async fn fetch_product_config(&self, product_id: &str) -> Result<ProductConfig, CatalogError> {
        match self {
            Catalog::Remote(client) => client.fetch_product_config(product_id).await,
            Catalog::Fixture(fixture) => fixture.fetch_product_config(product_id).await,
        }
    }
}
