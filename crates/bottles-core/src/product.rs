use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::component::{Component, ComponentKind};
use crate::traits::{Color, Finish};
use crate::CoreError;

/// Nominal cap choice offered on fused products, where the visible cap is
/// the fitment's bundled overcap rather than a standalone cap component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapSwatch {
    /// Slug, e.g. `"shiny-silver"`.
    pub id: String,
    /// Display label, e.g. `"Shiny Silver"`.
    pub label: String,
    pub color: Color,
    #[serde(default)]
    pub finish: Option<Finish>,
}

impl CapSwatch {
    #[must_use]
    pub fn new(label: &str, color: Color, finish: Option<Finish>) -> Self {
        Self {
            id: slugify(label),
            label: label.to_string(),
            color,
            finish,
        }
    }

    /// Swatches offered on fused products that do not author their own.
    #[must_use]
    pub fn standard_palette() -> Vec<CapSwatch> {
        vec![
            CapSwatch::new("Shiny Gold", Color::Gold, Some(Finish::Shiny)),
            CapSwatch::new("Matte Gold", Color::Gold, Some(Finish::Matte)),
            CapSwatch::new("Shiny Silver", Color::Silver, Some(Finish::Shiny)),
            CapSwatch::new("Matte Silver", Color::Silver, Some(Finish::Matte)),
            CapSwatch::new("Matte Black", Color::Black, Some(Finish::Matte)),
            CapSwatch::new("Shiny White", Color::White, Some(Finish::Shiny)),
        ]
    }
}

/// Generate a URL-safe slug from a label.
#[must_use]
pub fn slugify(label: &str) -> String {
    label
        .to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// The top-level configurable item as authored in the catalog, with option
/// lists still expressed as component ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    pub base_price: Decimal,
    /// Base SKU fragment. Carried on the cart line; the composite SKU is
    /// built from component fragments only.
    pub sku: String,
    #[serde(default)]
    pub default_glass: Option<String>,
    #[serde(default)]
    pub glass_options: Vec<String>,
    #[serde(default)]
    pub fitment_options: Vec<String>,
    #[serde(default)]
    pub cap_options: Vec<String>,
    #[serde(default)]
    pub cap_swatches: Option<Vec<CapSwatch>>,
}

/// A fully resolved, immutable product snapshot: every option list
/// dereferenced to its components.
///
/// Built once per product view by the configuration loader. The compositor
/// and selection controller only ever read from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductConfig {
    pub id: String,
    pub title: String,
    pub base_price: Decimal,
    pub sku: String,
    default_glass: Component,
    glass_options: Vec<Component>,
    fitment_options: Vec<Component>,
    cap_options: Vec<Component>,
    cap_swatches: Vec<CapSwatch>,
}

/// Inputs for [`ProductConfig::new`].
#[derive(Debug, Clone)]
pub struct ProductConfigParts {
    pub id: String,
    pub title: String,
    pub base_price: Decimal,
    pub sku: String,
    /// Id of the default glass. `None` selects the first glass option.
    pub default_glass: Option<String>,
    pub glass_options: Vec<Component>,
    pub fitment_options: Vec<Component>,
    pub cap_options: Vec<Component>,
    /// Authored swatches for fused products. `None` uses the standard palette.
    pub cap_swatches: Option<Vec<CapSwatch>>,
}

impl ProductConfig {
    /// Validates and assembles a resolved product snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidProduct`] if the product has no glass
    /// option, a component is listed under the wrong kind, an id repeats
    /// within one option list, or the default glass is not one of the glass
    /// options.
    pub fn new(parts: ProductConfigParts) -> Result<Self, CoreError> {
        let invalid = |reason: String| CoreError::InvalidProduct {
            product_id: parts.id.clone(),
            reason,
        };

        if parts.glass_options.is_empty() {
            return Err(invalid("product has no glass options".to_string()));
        }

        for (list, kind) in [
            (&parts.glass_options, ComponentKind::Glass),
            (&parts.fitment_options, ComponentKind::Fitment),
            (&parts.cap_options, ComponentKind::Cap),
        ] {
            let mut seen = HashSet::new();
            for component in list {
                if component.kind != kind {
                    return Err(invalid(format!(
                        "component '{}' is a {} but is listed as a {kind} option",
                        component.id, component.kind
                    )));
                }
                if !seen.insert(component.id.as_str()) {
                    return Err(invalid(format!(
                        "duplicate {kind} option '{}'",
                        component.id
                    )));
                }
            }
        }

        let default_glass = match parts.default_glass.as_deref() {
            Some(id) => parts
                .glass_options
                .iter()
                .find(|g| g.id == id)
                .cloned()
                .ok_or_else(|| invalid(format!("default glass '{id}' is not a glass option")))?,
            None => parts.glass_options[0].clone(),
        };

        let cap_swatches = if parts.cap_options.is_empty() {
            parts
                .cap_swatches
                .unwrap_or_else(CapSwatch::standard_palette)
        } else {
            Vec::new()
        };

        Ok(Self {
            id: parts.id,
            title: parts.title,
            base_price: parts.base_price,
            sku: parts.sku,
            default_glass,
            glass_options: parts.glass_options,
            fitment_options: parts.fitment_options,
            cap_options: parts.cap_options,
            cap_swatches,
        })
    }

    #[must_use]
    pub fn default_glass(&self) -> &Component {
        &self.default_glass
    }

    #[must_use]
    pub fn glass_options(&self) -> &[Component] {
        &self.glass_options
    }

    #[must_use]
    pub fn fitment_options(&self) -> &[Component] {
        &self.fitment_options
    }

    #[must_use]
    pub fn cap_options(&self) -> &[Component] {
        &self.cap_options
    }

    /// Cap swatches for fused products; empty when the product has real caps.
    #[must_use]
    pub fn cap_swatches(&self) -> &[CapSwatch] {
        &self.cap_swatches
    }

    /// `true` when the product has no independent cap axis (sprayer/pump).
    #[must_use]
    pub fn is_fused(&self) -> bool {
        self.cap_options.is_empty()
    }

    #[must_use]
    pub fn glass(&self, id: &str) -> Option<&Component> {
        self.glass_options.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn fitment(&self, id: &str) -> Option<&Component> {
        self.fitment_options.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn cap(&self, id: &str) -> Option<&Component> {
        self.cap_options.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn cap_swatch(&self, id: &str) -> Option<&CapSwatch> {
        self.cap_swatches.iter().find(|s| s.id == id)
    }
}
