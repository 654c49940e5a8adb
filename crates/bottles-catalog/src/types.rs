//! CMS response types for the product configuration query.
//!
//! ## Observed shape
//!
//! ### Envelope
//! The query endpoint wraps every answer as `{ "ms": 12, "query": "...",
//! "result": ... }`. `result` is `null` when no document matches.
//!
//! ### Dereferenced arrays
//! Projections like `glassOptions[]->{...}` return `null` (not `[]`) when the
//! field was never set on the product, and contain `null` entries for
//! references whose target was deleted. Both are modeled as `Option` and
//! cleaned up in normalization.
//!
//! ### Numbers
//! `basePrice`, `priceModifier` and `assemblyOffset.{x,y}` are plain JSON
//! numbers. Prices are rounded to four decimal places during normalization
//! to shed float noise.
//!
//! ### Attribute tags
//! `finish`, `color`, `style` and `material` are free strings in the editor
//! (`"shiny"`, `"Rose Gold"`, ...). Unknown values are ignored so one bad tag
//! does not make the whole product unavailable.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Top-level response from the query endpoint.
#[derive(Debug, Deserialize)]
pub struct ProductQueryResponse {
    pub result: Option<ProductDocument>,
    /// Server-side query time in milliseconds.
    pub ms: Option<u64>,
}

/// A product with every reference already dereferenced by the query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: Option<String>,
    pub base_price: Option<Decimal>,
    pub sku: Option<String>,
    pub default_glass: Option<ComponentDocument>,
    pub glass_options: Option<Vec<Option<ComponentDocument>>>,
    pub fitment_options: Option<Vec<Option<ComponentDocument>>>,
    pub cap_options: Option<Vec<Option<ComponentDocument>>>,
    pub cap_swatches: Option<Vec<SwatchDocument>>,
}

/// A `glassOption`, `fitmentVariant` or `capOption` document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: Option<String>,
    pub sku_part: Option<String>,
    pub price_modifier: Option<Decimal>,
    /// Resolved asset URL (`layerImage.asset->url`).
    pub layer_image: Option<String>,
    pub preview_swatch_image: Option<String>,
    pub overcap_image: Option<String>,
    pub assembly_offset: Option<OffsetDocument>,
    pub finish: Option<String>,
    pub color: Option<String>,
    pub style: Option<String>,
    pub material: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct OffsetDocument {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// An authored cap swatch on a fused product.
#[derive(Debug, Clone, Deserialize)]
pub struct SwatchDocument {
    pub label: String,
    pub color: String,
    pub finish: Option<String>,
}
