//! Visualization surface: absolute placement of each composite layer on the
//! shared square canvas.
//!
//! Every asset is authored at canvas size, so a layer fills the canvas and
//! only its assembly offset moves it.

use bottles_core::{CapSwatch, Component, Material, ProductConfig};
use serde::Serialize;

use crate::compositor::{CompositeView, LayerRole};
use crate::selection::Selection;

pub const DEFAULT_CANVAS_SIZE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    #[must_use]
    pub fn square(size: u32) -> Self {
        Self {
            width: size,
            height: size,
        }
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::square(DEFAULT_CANVAS_SIZE)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedLayer {
    /// Stacking order, 0 at the bottom.
    pub z_index: u32,
    pub role: LayerRole,
    pub component_id: String,
    pub image: String,
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    pub canvas: Canvas,
    pub layers: Vec<PlacedLayer>,
}

#[must_use]
pub fn render_plan(view: &CompositeView, canvas: Canvas) -> RenderPlan {
    let layers = view
        .layers
        .iter()
        .zip(0u32..)
        .map(|(layer, z_index)| PlacedLayer {
            z_index,
            role: layer.role,
            component_id: layer.component_id.clone(),
            image: layer.image.clone(),
            left: layer.offset.x,
            top: layer.offset.y,
            width: canvas.width,
            height: canvas.height,
        })
        .collect();

    RenderPlan { canvas, layers }
}

/// One entry in an option picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorOption {
    pub component_id: String,
    pub name: String,
    pub swatch_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<Material>,
    pub selected: bool,
}

impl SelectorOption {
    fn new(component: &Component, selected: Option<&str>) -> Self {
        Self {
            component_id: component.id.clone(),
            name: component.name.clone(),
            swatch_image: component.swatch_image().to_string(),
            material: component.material(),
            selected: selected == Some(component.id.as_str()),
        }
    }
}

/// Option pickers for one product. Fused products offer `cap_swatches`
/// instead of cap components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectorPanel {
    pub glass: Vec<SelectorOption>,
    pub fitment: Vec<SelectorOption>,
    pub cap: Vec<SelectorOption>,
    pub cap_swatches: Vec<CapSwatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_swatch: Option<String>,
}

#[must_use]
pub fn selector_panel(config: &ProductConfig, selection: &Selection) -> SelectorPanel {
    let options = |components: &[Component], selected: Option<&str>| {
        components
            .iter()
            .map(|c| SelectorOption::new(c, selected))
            .collect::<Vec<_>>()
    };

    SelectorPanel {
        glass: options(config.glass_options(), Some(selection.glass.as_str())),
        fitment: options(config.fitment_options(), selection.fitment.as_deref()),
        cap: options(config.cap_options(), selection.cap.as_deref()),
        cap_swatches: if config.is_fused() {
            config.cap_swatches().to_vec()
        } else {
            Vec::new()
        },
        selected_swatch: selection.cap_swatch.clone(),
    }
}
