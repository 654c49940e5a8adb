//! Order assembly: freezes a selection into the payload handed to the
//! external checkout.

use bottles_core::ProductConfig;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::compositor::{derive, resolve};
use crate::selection::Selection;

pub const ATTR_GLASS: &str = "Glass";
pub const ATTR_MECHANISM: &str = "Mechanism";
pub const ATTR_CAP: &str = "Cap";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartAttribute {
    pub key: String,
    pub value: String,
}

impl CartAttribute {
    fn new(key: &str, value: &str) -> Self {
        Self {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

/// Immutable cart line for one configured product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product_id: String,
    /// Base SKU fragment from the product record.
    pub product_sku: String,
    /// Composite SKU, identical to the one shown in the configurator.
    pub sku: String,
    pub price: Decimal,
    pub display_name: String,
    pub attributes: Vec<CartAttribute>,
}

impl CartLine {
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.as_str())
    }
}

/// Builds the cart line for `selection`.
///
/// SKU and price come from [`derive`], so they always match the composite.
/// Axes that are absent (no fitment, no cap, a fitment hidden by a flat cap)
/// are left out of the attributes. On fused products the cap attribute is the
/// swatch label and is only present when both a fitment and a swatch are
/// selected.
#[must_use]
pub fn to_cart_line(config: &ProductConfig, selection: &Selection) -> CartLine {
    let view = derive(config, selection);
    let resolved = resolve(config, selection);

    let mut attributes = vec![CartAttribute::new(ATTR_GLASS, &resolved.glass.name)];
    if let Some(fitment) = resolved.fitment {
        attributes.push(CartAttribute::new(ATTR_MECHANISM, &fitment.name));
    }
    if resolved.fused {
        if let (Some(_), Some(swatch)) = (resolved.fitment, resolved.swatch) {
            attributes.push(CartAttribute::new(ATTR_CAP, &swatch.label));
        }
    } else if let Some(cap) = resolved.cap {
        attributes.push(CartAttribute::new(ATTR_CAP, &cap.name));
    }

    CartLine {
        product_id: config.id.clone(),
        product_sku: config.sku.clone(),
        sku: view.sku,
        price: view.price,
        display_name: format!("{} - {}", config.title, resolved.glass.name),
        attributes,
    }
}
