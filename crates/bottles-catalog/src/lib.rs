pub mod client;
pub mod error;
pub mod fixture;
pub mod loader;
pub mod normalize;
pub mod query;
pub mod source;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use fixture::FixtureCatalog;
pub use loader::{load_product_config, Catalog, LoadError, LOAD_FAILURE_MESSAGE};
pub use normalize::normalize_product;
pub use source::CatalogSource;
