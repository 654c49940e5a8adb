//! HTTP client for the headless CMS query endpoint.
//!
//! Wraps `reqwest` with catalog-specific URL building, optional bearer
//! authentication, and typed response deserialization. Every product load is
//! a single GET carrying the query from [`crate::query`] and the product id
//! as the `$id` parameter.

use std::time::Duration;

use bottles_core::ProductConfig;
use reqwest::{Client, Url};

use crate::error::CatalogError;
use crate::normalize::normalize_product;
use crate::query::product_config_query;
use crate::source::CatalogSource;
use crate::types::{ProductDocument, ProductQueryResponse};

/// Client for the CMS query API.
///
/// Use [`CatalogClient::new`] with the project URL from configuration, or
/// point it at a mock server in tests. The client holds no global state; pass
/// it to [`crate::load_product_config`] explicitly.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    dataset: String,
    api_version: String,
    token: Option<String>,
}

impl CatalogClient {
    /// Creates a new client.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CatalogError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(
        base_url: &str,
        dataset: &str,
        api_version: &str,
        token: Option<&str>,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // `Url::join` appends rather than replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| CatalogError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            dataset: dataset.to_owned(),
            api_version: api_version.trim_start_matches('v').to_owned(),
            token: token.map(str::to_owned),
        })
    }

    /// Fetches the raw product document with every option list dereferenced.
    ///
    /// Returns `Ok(None)` when the query matched no product.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network failure.
    /// - [`CatalogError::UnexpectedStatus`] on any non-2xx status.
    /// - [`CatalogError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn fetch_product_document(
        &self,
        product_id: &str,
    ) -> Result<Option<ProductDocument>, CatalogError> {
        let url = self.build_query_url(&product_config_query(), product_id)?;

        let mut request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: redact_query(&url),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<ProductQueryResponse>(&body).map_err(|e| {
            CatalogError::Deserialize {
                context: format!("product query for {product_id}"),
                source: e,
            }
        })?;

        if let Some(ms) = parsed.ms {
            tracing::debug!(product_id, query_ms = ms, "catalog query completed");
        }

        Ok(parsed.result)
    }

    /// Builds `{base}/v{api_version}/data/query/{dataset}` with the query and
    /// the JSON-encoded `$id` parameter percent-encoded into the query string.
    fn build_query_url(&self, query: &str, product_id: &str) -> Result<Url, CatalogError> {
        let path = format!("v{}/data/query/{}", self.api_version, self.dataset);
        let mut url = self
            .base_url
            .join(&path)
            .map_err(|e| CatalogError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: e.to_string(),
            })?;
        // Query parameters are JSON values, so the id goes in as a JSON string.
        let id_param = serde_json::Value::String(product_id.to_owned()).to_string();
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("$id", &id_param);
        Ok(url)
    }
}

impl CatalogSource for CatalogClient {
    async fn fetch_product_config(&self, product_id: &str) -> Result<ProductConfig, CatalogError> {
        let doc = self
            .fetch_product_document(product_id)
            .await?
            .ok_or_else(|| CatalogError::ProductNotFound {
                product_id: product_id.to_owned(),
            })?;
        normalize_product(doc)
    }
}

/// Strips the query string for error messages; the GROQ text is long and the
/// path alone identifies the endpoint.
fn redact_query(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
