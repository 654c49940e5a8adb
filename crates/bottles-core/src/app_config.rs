use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::traits::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Where product configurations are read from.
#[derive(Clone, PartialEq, Eq)]
pub enum CatalogBackend {
    /// Headless CMS query endpoint.
    Remote {
        base_url: String,
        dataset: String,
        api_version: String,
        token: Option<String>,
    },
    /// Local YAML catalog, see [`crate::load_catalog_file`].
    Fixture(PathBuf),
}

impl std::fmt::Debug for CatalogBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogBackend::Remote {
                base_url,
                dataset,
                api_version,
                token,
            } => f
                .debug_struct("Remote")
                .field("base_url", base_url)
                .field("dataset", dataset)
                .field("api_version", api_version)
                .field("token", &token.as_ref().map(|_| "[redacted]"))
                .finish(),
            CatalogBackend::Fixture(path) => f.debug_tuple("Fixture").field(path).finish(),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub catalog: CatalogBackend,
    pub catalog_request_timeout_secs: u64,
    pub catalog_user_agent: String,
    /// ISO 4217 code stamped on cart lines.
    pub currency_code: String,
    /// Edge length in pixels of the square canvas all layer assets share.
    pub canvas_size: u32,
    /// Fallback fitment id per cap color for fused-product auto-matching.
    pub automatch_fallbacks: BTreeMap<Color, String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field("catalog", &self.catalog)
            .field(
                "catalog_request_timeout_secs",
                &self.catalog_request_timeout_secs,
            )
            .field("catalog_user_agent", &self.catalog_user_agent)
            .field("currency_code", &self.currency_code)
            .field("canvas_size", &self.canvas_size)
            .field("automatch_fallbacks", &self.automatch_fallbacks)
            .finish()
    }
}
