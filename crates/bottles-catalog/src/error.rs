use bottles_core::{ConfigError, CoreError};
use thiserror::Error;

/// Errors returned while reading product configurations from a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The catalog answered but holds no product with this id.
    #[error("product not found: {product_id}")]
    ProductNotFound { product_id: String },

    #[error("normalization error for product {product_id}: {reason}")]
    Normalization { product_id: String, reason: String },

    #[error("invalid catalog base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },

    #[error("fixture catalog error: {0}")]
    Fixture(#[from] ConfigError),
}

impl From<CoreError> for CatalogError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidProduct { product_id, reason } => {
                CatalogError::Normalization { product_id, reason }
            }
        }
    }
}
