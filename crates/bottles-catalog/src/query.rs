//! The single query that resolves a product and all of its compatible
//! components in one round trip.

/// Fields projected from every component document.
const COMPONENT_PROJECTION: &str = r#"{
    _id,
    name,
    skuPart,
    priceModifier,
    "layerImage": layerImage.asset->url,
    "previewSwatchImage": previewSwatchImage.asset->url,
    "overcapImage": overcapImage.asset->url,
    assemblyOffset,
    finish,
    color,
    style,
    material
  }"#;

/// Builds the product configuration query. The product is matched on
/// document id or slug, bound through the `$id` parameter.
#[must_use]
pub fn product_config_query() -> String {
    format!(
        r#"*[_type == "product" && (_id == $id || slug.current == $id)][0]{{
  _id,
  title,
  basePrice,
  sku,
  "defaultGlass": defaultGlass->{c},
  "glassOptions": glassOptions[]->{c},
  "fitmentOptions": fitmentOptions[]->{c},
  "capOptions": capOptions[]->{c},
  capSwatches[]{{ label, color, finish }}
}}"#,
        c = COMPONENT_PROJECTION
    )
}
