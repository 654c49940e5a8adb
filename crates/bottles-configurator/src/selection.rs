use bottles_core::ProductConfig;
use serde::{Deserialize, Serialize};

/// The shopper's current choice for one product view.
///
/// Ids refer to entries in the product's option lists. The controller keeps
/// them valid; [`crate::derive`] tolerates stale ones anyway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub glass: String,
    /// `None` is a valid "no insert" state.
    pub fitment: Option<String>,
    /// Cap component id. Always `None` on fused products.
    pub cap: Option<String>,
    /// Cap swatch id on fused products, where the visible cap is the
    /// fitment's overcap. Always `None` on products with real caps.
    pub cap_swatch: Option<String>,
}

impl Selection {
    /// Seeds a selection from the product's defaults: the default glass, the
    /// first fitment option and, for non-fused products, the first cap option.
    #[must_use]
    pub fn defaults(config: &ProductConfig) -> Self {
        Self {
            glass: config.default_glass().id.clone(),
            fitment: config.fitment_options().first().map(|f| f.id.clone()),
            cap: if config.is_fused() {
                None
            } else {
                config.cap_options().first().map(|c| c.id.clone())
            },
            cap_swatch: None,
        }
    }
}
