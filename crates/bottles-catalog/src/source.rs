use std::future::Future;

use bottles_core::ProductConfig;

use crate::error::CatalogError;

/// Read-only access to resolved product configurations.
///
/// Implementations must resolve the product and every option list in one
/// read; callers never re-fetch mid-session.
pub trait CatalogSource {
    /// Fetches and resolves the configuration for `product_id`.
    ///
    /// Implementations return [`CatalogError::ProductNotFound`] when the
    /// catalog answered but has no such product.
    fn fetch_product_config(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<ProductConfig, CatalogError>> + Send;
}
