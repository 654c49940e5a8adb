pub mod app_config;
pub mod catalog_file;
pub mod component;
pub mod config;
pub mod product;
pub mod traits;

use thiserror::Error;

pub use app_config::{AppConfig, CatalogBackend, Environment};
pub use catalog_file::{load_catalog_file, parse_catalog_str};
pub use component::{AssemblyOffset, Component, ComponentKind};
pub use config::{load_app_config, load_app_config_from_env};
pub use product::{CapSwatch, Product, ProductConfig, ProductConfigParts};
pub use traits::{CapStyle, Color, ComponentTraits, Finish, Material};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid product {product_id}: {reason}")]
    InvalidProduct { product_id: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),

    #[error("catalog validation failed: {0}")]
    CatalogValidation(String),

    #[error(transparent)]
    Product(#[from] CoreError),
}
