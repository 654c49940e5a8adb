//! Compositor engine: turns a product snapshot plus a selection into the
//! ordered layer stack, composite SKU and price.
//!
//! [`derive`] is pure and never fails. Stale ids are tolerated: an unknown
//! glass falls back to the default glass, an unknown fitment or cap is
//! treated as absent.

use bottles_core::{AssemblyOffset, CapSwatch, Component, ProductConfig};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::rules::suppresses_fitment;
use crate::selection::Selection;

/// Which slot of the paper-doll stack a layer occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRole {
    Glass,
    Fitment,
    Cap,
    /// Bundled cap graphic of a fused product's fitment.
    Overcap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerImage {
    pub role: LayerRole,
    /// Id of the component that supplied the image. For overcaps this is the
    /// fitment.
    pub component_id: String,
    pub image: String,
    #[serde(skip_serializing_if = "AssemblyOffset::is_zero")]
    pub offset: AssemblyOffset,
}

/// Everything the surface and order assembly need for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompositeView {
    pub product_id: String,
    /// Bottom to top.
    pub layers: Vec<LayerImage>,
    pub sku: String,
    pub price: Decimal,
    pub fused: bool,
    pub glass_id: String,
    /// Effective fitment; `None` when absent or suppressed by a flat cap.
    pub fitment_id: Option<String>,
    pub cap_id: Option<String>,
    /// `true` when a stored fitment is hidden by a flat cap.
    pub fitment_suppressed: bool,
}

/// A selection resolved against its product snapshot.
pub(crate) struct Resolved<'a> {
    pub glass: &'a Component,
    /// Effective fitment after flat-cap suppression.
    pub fitment: Option<&'a Component>,
    /// Cap component. Always `None` on fused products.
    pub cap: Option<&'a Component>,
    pub swatch: Option<&'a CapSwatch>,
    pub fused: bool,
    pub fitment_suppressed: bool,
}

pub(crate) fn resolve<'a>(config: &'a ProductConfig, selection: &Selection) -> Resolved<'a> {
    let glass = config
        .glass(&selection.glass)
        .unwrap_or_else(|| config.default_glass());
    let stored_fitment = selection.fitment.as_deref().and_then(|id| config.fitment(id));
    let fused = config.is_fused();

    let (cap, swatch) = if fused {
        let swatch = selection
            .cap_swatch
            .as_deref()
            .and_then(|id| config.cap_swatch(id));
        (None, swatch)
    } else {
        (selection.cap.as_deref().and_then(|id| config.cap(id)), None)
    };

    let fitment_suppressed = stored_fitment.is_some() && suppresses_fitment(cap);
    let fitment = if fitment_suppressed {
        None
    } else {
        stored_fitment
    };

    Resolved {
        glass,
        fitment,
        cap,
        swatch,
        fused,
        fitment_suppressed,
    }
}

/// Derives the composite for `selection`.
///
/// Layers are always ordered glass, fitment, cap (or overcap). Price is the
/// base price plus the glass and cap modifiers; the fitment never contributes.
/// The SKU concatenates the glass, effective fitment and cap fragments.
#[must_use]
pub fn derive(config: &ProductConfig, selection: &Selection) -> CompositeView {
    let resolved = resolve(config, selection);

    let mut layers = Vec::with_capacity(3);
    layers.push(LayerImage {
        role: LayerRole::Glass,
        component_id: resolved.glass.id.clone(),
        image: resolved.glass.layer_image.clone(),
        offset: resolved.glass.layer_offset(),
    });

    if let Some(fitment) = resolved.fitment {
        layers.push(LayerImage {
            role: LayerRole::Fitment,
            component_id: fitment.id.clone(),
            image: fitment.layer_image.clone(),
            offset: fitment.layer_offset(),
        });
    }

    if resolved.fused {
        if let Some((fitment, overcap)) = resolved
            .fitment
            .and_then(|f| f.overcap_image.as_ref().map(|img| (f, img)))
        {
            layers.push(LayerImage {
                role: LayerRole::Overcap,
                component_id: fitment.id.clone(),
                image: overcap.clone(),
                offset: fitment.layer_offset(),
            });
        }
    } else if let Some(cap) = resolved.cap {
        layers.push(LayerImage {
            role: LayerRole::Cap,
            component_id: cap.id.clone(),
            image: cap.layer_image.clone(),
            offset: cap.layer_offset(),
        });
    }

    let mut price = config.base_price + resolved.glass.price_modifier;
    if let Some(cap) = resolved.cap {
        price += cap.price_modifier;
    }

    let mut sku = resolved.glass.sku_part.clone();
    if let Some(fitment) = resolved.fitment {
        sku.push_str(&fitment.sku_part);
    }
    if let Some(cap) = resolved.cap {
        sku.push_str(&cap.sku_part);
    }

    CompositeView {
        product_id: config.id.clone(),
        layers,
        sku,
        price,
        fused: resolved.fused,
        glass_id: resolved.glass.id.clone(),
        fitment_id: resolved.fitment.map(|f| f.id.clone()),
        cap_id: resolved.cap.map(|c| c.id.clone()),
        fitment_suppressed: resolved.fitment_suppressed,
    }
}

#[cfg(test)]
#[path = "compositor_test.rs"]
mod tests;
