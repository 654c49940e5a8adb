use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::traits::{
    infer_color, infer_finish, infer_material, infer_style, CapStyle, Color, ComponentTraits,
    Finish, Material,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Glass,
    Fitment,
    Cap,
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentKind::Glass => write!(f, "glass"),
            ComponentKind::Fitment => write!(f, "fitment"),
            ComponentKind::Cap => write!(f, "cap"),
        }
    }
}

/// Pixel correction for layers that are not naturally aligned to the shared
/// canvas. Only honored on Fitment and Cap layers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblyOffset {
    pub x: i32,
    pub y: i32,
}

impl AssemblyOffset {
    pub const ZERO: AssemblyOffset = AssemblyOffset { x: 0, y: 0 };

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

/// A glass body, fitment or cap that can be layered onto a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Catalog id, unique within its [`ComponentKind`].
    pub id: String,
    pub name: String,
    pub kind: ComponentKind,
    /// Fragment appended to the composite SKU, e.g. `"GBCyl"` or `"Roll"`.
    pub sku_part: String,
    /// Signed delta added to the product's base price. Fitments carry one for
    /// bookkeeping but never contribute to the total.
    #[serde(default)]
    pub price_modifier: Decimal,
    /// Transparent raster pre-aligned to the shared canvas.
    pub layer_image: String,
    #[serde(default)]
    pub preview_swatch_image: Option<String>,
    #[serde(default)]
    pub assembly_offset: Option<AssemblyOffset>,
    /// Bundled cap graphic for fused (sprayer/pump) products. Fitments only.
    #[serde(default)]
    pub overcap_image: Option<String>,
    #[serde(flatten)]
    pub traits: ComponentTraits,
}

impl Component {
    /// Image shown in selector UIs; falls back to the layer image.
    #[must_use]
    pub fn swatch_image(&self) -> &str {
        self.preview_swatch_image
            .as_deref()
            .unwrap_or(&self.layer_image)
    }

    /// Offset applied when layering. Glass is always drawn at the origin.
    #[must_use]
    pub fn layer_offset(&self) -> AssemblyOffset {
        match self.kind {
            ComponentKind::Glass => AssemblyOffset::ZERO,
            ComponentKind::Fitment | ComponentKind::Cap => {
                self.assembly_offset.unwrap_or(AssemblyOffset::ZERO)
            }
        }
    }

    #[must_use]
    pub fn finish(&self) -> Option<Finish> {
        self.traits.finish.or_else(|| infer_finish(&self.name))
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.traits.color.or_else(|| infer_color(&self.name))
    }

    #[must_use]
    pub fn style(&self) -> CapStyle {
        self.traits.style.unwrap_or_else(|| infer_style(&self.name))
    }

    #[must_use]
    pub fn material(&self) -> Option<Material> {
        self.traits.material.or_else(|| infer_material(&self.name))
    }

    /// `true` for caps whose style precludes a roller or other fitment.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.style() == CapStyle::Flat
    }
}
