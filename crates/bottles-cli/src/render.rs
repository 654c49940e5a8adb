//! Flattens a render plan into a single PNG.
//!
//! Only local assets are supported; remote layer URLs are rejected rather
//! than fetched.

use std::path::Path;

use anyhow::Context;
use bottles_configurator::RenderPlan;
use image::{imageops, RgbaImage};

/// A decoded layer and its top-left position on the canvas.
pub(crate) struct DecodedLayer {
    pub image: RgbaImage,
    pub left: i64,
    pub top: i64,
}

pub(crate) fn write_png(plan: &RenderPlan, assets_dir: &Path, out: &Path) -> anyhow::Result<()> {
    let mut layers = Vec::with_capacity(plan.layers.len());
    for placed in &plan.layers {
        if placed.image.starts_with("http://") || placed.image.starts_with("https://") {
            anyhow::bail!(
                "layer '{}' is remote ({}); render only reads local assets",
                placed.component_id,
                placed.image
            );
        }
        let path = assets_dir.join(&placed.image);
        let image = image::open(&path)
            .with_context(|| format!("decode layer image '{}'", path.display()))?
            .to_rgba8();
        if image.dimensions() != (placed.width, placed.height) {
            tracing::warn!(
                component_id = %placed.component_id,
                width = image.width(),
                height = image.height(),
                "layer image is not authored at canvas size and will misregister"
            );
        }
        layers.push(DecodedLayer {
            image,
            left: i64::from(placed.left),
            top: i64::from(placed.top),
        });
    }

    let flat = flatten(plan.canvas.width, plan.canvas.height, &layers);

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        out,
        flat.as_raw(),
        flat.width(),
        flat.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    Ok(())
}

/// Composites `layers` bottom to top onto a transparent canvas.
pub(crate) fn flatten(width: u32, height: u32, layers: &[DecodedLayer]) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    for layer in layers {
        imageops::overlay(&mut canvas, &layer.image, layer.left, layer.top);
    }
    canvas
}
