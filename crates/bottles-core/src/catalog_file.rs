//! YAML catalog used for local development and demos in place of the CMS.
//!
//! Components are declared once per kind and products reference them by id,
//! mirroring how the CMS stores references:
//!
//! ```yaml
//! components:
//!   glass:
//!     - { id: glass-clear, name: Clear, sku_part: GBCyl, layer_image: glass/clear.png }
//!   fitments: []
//!   caps: []
//! products:
//!   - id: roll-on-9ml
//!     title: 9ml Roll-On
//!     base_price: "1.50"
//!     sku: RO9
//!     glass_options: [glass-clear]
//! ```

use std::collections::{HashMap, HashSet};
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::component::{AssemblyOffset, Component, ComponentKind};
use crate::product::{Product, ProductConfig, ProductConfigParts};
use crate::traits::ComponentTraits;
use crate::ConfigError;

#[derive(Debug, Deserialize)]
struct ComponentEntry {
    id: String,
    name: String,
    sku_part: String,
    #[serde(default)]
    price_modifier: Decimal,
    layer_image: String,
    #[serde(default)]
    preview_swatch_image: Option<String>,
    #[serde(default)]
    assembly_offset: Option<AssemblyOffset>,
    #[serde(default)]
    overcap_image: Option<String>,
    #[serde(flatten)]
    traits: ComponentTraits,
}

impl ComponentEntry {
    fn into_component(self, kind: ComponentKind) -> Component {
        Component {
            id: self.id,
            name: self.name,
            kind,
            sku_part: self.sku_part,
            price_modifier: self.price_modifier,
            layer_image: self.layer_image,
            preview_swatch_image: self.preview_swatch_image,
            assembly_offset: self.assembly_offset,
            overcap_image: self.overcap_image,
            traits: self.traits,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ComponentSections {
    #[serde(default)]
    glass: Vec<ComponentEntry>,
    #[serde(default)]
    fitments: Vec<ComponentEntry>,
    #[serde(default)]
    caps: Vec<ComponentEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    components: ComponentSections,
    products: Vec<Product>,
}

/// Load, resolve and validate a catalog YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read or parsed, a product
/// references an unknown component, or a product fails
/// [`ProductConfig::new`] validation.
pub fn load_catalog_file(path: &Path) -> Result<Vec<ProductConfig>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_catalog_str(&content)
}

/// Parse and resolve catalog YAML already in memory.
///
/// # Errors
///
/// Same as [`load_catalog_file`], minus IO.
pub fn parse_catalog_str(content: &str) -> Result<Vec<ProductConfig>, ConfigError> {
    let file: CatalogFile = serde_yaml::from_str(content).map_err(ConfigError::CatalogFileParse)?;
    resolve_catalog(file)
}

fn index_components(
    entries: Vec<ComponentEntry>,
    kind: ComponentKind,
) -> Result<HashMap<String, Component>, ConfigError> {
    let mut index = HashMap::with_capacity(entries.len());
    for entry in entries {
        let component = entry.into_component(kind);
        if index.contains_key(&component.id) {
            return Err(ConfigError::CatalogValidation(format!(
                "duplicate {kind} component id '{}'",
                component.id
            )));
        }
        index.insert(component.id.clone(), component);
    }
    Ok(index)
}

fn resolve_refs(
    product_id: &str,
    ids: &[String],
    index: &HashMap<String, Component>,
    kind: ComponentKind,
) -> Result<Vec<Component>, ConfigError> {
    ids.iter()
        .map(|id| {
            index.get(id).cloned().ok_or_else(|| {
                ConfigError::CatalogValidation(format!(
                    "product '{product_id}' references unknown {kind} '{id}'"
                ))
            })
        })
        .collect()
}

fn resolve_catalog(file: CatalogFile) -> Result<Vec<ProductConfig>, ConfigError> {
    let glass = index_components(file.components.glass, ComponentKind::Glass)?;
    let fitments = index_components(file.components.fitments, ComponentKind::Fitment)?;
    let caps = index_components(file.components.caps, ComponentKind::Cap)?;

    let mut seen = HashSet::new();
    let mut configs = Vec::with_capacity(file.products.len());
    for product in file.products {
        if !seen.insert(product.id.clone()) {
            return Err(ConfigError::CatalogValidation(format!(
                "duplicate product id '{}'",
                product.id
            )));
        }

        let parts = ProductConfigParts {
            glass_options: resolve_refs(
                &product.id,
                &product.glass_options,
                &glass,
                ComponentKind::Glass,
            )?,
            fitment_options: resolve_refs(
                &product.id,
                &product.fitment_options,
                &fitments,
                ComponentKind::Fitment,
            )?,
            cap_options: resolve_refs(
                &product.id,
                &product.cap_options,
                &caps,
                ComponentKind::Cap,
            )?,
            id: product.id,
            title: product.title,
            base_price: product.base_price,
            sku: product.sku,
            default_glass: product.default_glass,
            cap_swatches: product.cap_swatches,
        };
        configs.push(ProductConfig::new(parts)?);
    }

    Ok(configs)
}
