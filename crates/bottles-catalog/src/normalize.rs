//! Normalization from CMS documents to [`bottles_core::ProductConfig`].

use bottles_core::traits::{infer_finish, infer_material};
use bottles_core::{
    AssemblyOffset, CapStyle, CapSwatch, Color, Component, ComponentKind, ComponentTraits,
    ProductConfig, ProductConfigParts,
};
use rust_decimal::Decimal;

use crate::error::CatalogError;
use crate::types::{ComponentDocument, OffsetDocument, ProductDocument, SwatchDocument};

/// Decimal places kept on prices coming from JSON floats.
const PRICE_SCALE: u32 = 4;

/// Normalizes a dereferenced [`ProductDocument`] into a [`ProductConfig`].
///
/// Option entries that were deleted in the CMS (`null`) or that have no layer
/// image are skipped with a warning. A missing or dangling `defaultGlass`
/// falls back to the first glass option.
///
/// # Errors
///
/// Returns [`CatalogError::Normalization`] if the product has no base price or
/// no usable glass option.
pub fn normalize_product(doc: ProductDocument) -> Result<ProductConfig, CatalogError> {
    let product_id = doc.id;

    let base_price = doc
        .base_price
        .map(|p| p.round_dp(PRICE_SCALE))
        .ok_or_else(|| CatalogError::Normalization {
            product_id: product_id.clone(),
            reason: "product has no base price".into(),
        })?;

    let glass_options = normalize_options(&product_id, doc.glass_options, ComponentKind::Glass);
    let fitment_options =
        normalize_options(&product_id, doc.fitment_options, ComponentKind::Fitment);
    let cap_options = normalize_options(&product_id, doc.cap_options, ComponentKind::Cap);

    if glass_options.is_empty() {
        return Err(CatalogError::Normalization {
            product_id,
            reason: "product has no usable glass options".into(),
        });
    }

    let default_glass = doc.default_glass.and_then(|g| {
        if glass_options.iter().any(|o| o.id == g.id) {
            Some(g.id)
        } else {
            tracing::warn!(
                product_id = %product_id,
                default_glass = %g.id,
                "default glass is not among glass options; using first option"
            );
            None
        }
    });

    let cap_swatches = doc
        .cap_swatches
        .map(|swatches| normalize_swatches(&product_id, swatches))
        .filter(|s| !s.is_empty());

    let title = doc
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| product_id.clone());

    let config = ProductConfig::new(ProductConfigParts {
        id: product_id,
        title,
        base_price,
        sku: doc.sku.unwrap_or_default(),
        default_glass,
        glass_options,
        fitment_options,
        cap_options,
        cap_swatches,
    })?;

    Ok(config)
}

fn normalize_options(
    product_id: &str,
    docs: Option<Vec<Option<ComponentDocument>>>,
    kind: ComponentKind,
) -> Vec<Component> {
    let mut seen = std::collections::HashSet::new();
    docs.unwrap_or_default()
        .into_iter()
        .enumerate()
        .filter_map(|(idx, doc)| {
            let Some(doc) = doc else {
                tracing::warn!(
                    product_id,
                    %kind,
                    index = idx,
                    "skipping dangling component reference"
                );
                return None;
            };
            if !seen.insert(doc.id.clone()) {
                tracing::warn!(
                    product_id,
                    %kind,
                    component_id = %doc.id,
                    "skipping duplicate component"
                );
                return None;
            }
            normalize_component(product_id, doc, kind)
        })
        .collect()
}

/// Normalizes one component document. Returns `None` (and logs) when the
/// document has no layer image, since it cannot be composited.
fn normalize_component(
    product_id: &str,
    doc: ComponentDocument,
    kind: ComponentKind,
) -> Option<Component> {
    let Some(layer_image) = doc.layer_image.filter(|u| !u.is_empty()) else {
        tracing::warn!(
            product_id,
            %kind,
            component_id = %doc.id,
            "skipping component without layer image"
        );
        return None;
    };

    let name = doc
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| doc.id.clone());

    // Tags are single keywords, so the name tokenizer doubles as a parser.
    let traits = ComponentTraits {
        finish: doc.finish.as_deref().and_then(infer_finish),
        color: doc.color.as_deref().and_then(Color::parse_keyword),
        style: doc.style.as_deref().and_then(parse_style),
        material: doc.material.as_deref().and_then(infer_material),
    };

    // Overcaps only make sense on fitments; drop them elsewhere.
    let overcap_image = match kind {
        ComponentKind::Fitment => doc.overcap_image.filter(|u| !u.is_empty()),
        ComponentKind::Glass | ComponentKind::Cap => None,
    };

    Some(Component {
        id: doc.id,
        name,
        kind,
        sku_part: doc.sku_part.unwrap_or_default(),
        price_modifier: doc
            .price_modifier
            .map_or(Decimal::ZERO, |p| p.round_dp(PRICE_SCALE)),
        layer_image,
        preview_swatch_image: doc.preview_swatch_image.filter(|u| !u.is_empty()),
        assembly_offset: doc.assembly_offset.map(normalize_offset),
        overcap_image,
        traits,
    })
}

#[allow(clippy::cast_possible_truncation)]
fn normalize_offset(doc: OffsetDocument) -> AssemblyOffset {
    AssemblyOffset {
        x: doc.x.unwrap_or(0.0).round() as i32,
        y: doc.y.unwrap_or(0.0).round() as i32,
    }
}

fn normalize_swatches(product_id: &str, docs: Vec<SwatchDocument>) -> Vec<CapSwatch> {
    docs.into_iter()
        .filter_map(|doc| {
            let Some(color) = Color::parse_keyword(&doc.color) else {
                tracing::warn!(
                    product_id,
                    label = %doc.label,
                    color = %doc.color,
                    "skipping swatch with unknown color"
                );
                return None;
            };
            let finish = doc.finish.as_deref().and_then(infer_finish);
            Some(CapSwatch::new(&doc.label, color, finish))
        })
        .collect()
}

fn parse_style(raw: &str) -> Option<CapStyle> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "flat" => Some(CapStyle::Flat),
        "standard" | "tall" | "domed" => Some(CapStyle::Standard),
        _ => None,
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
