//! Loads a product and applies the command-line selection to it.
//!
//! The controller silently ignores ids outside the product's option lists;
//! here an ignored id is an operator mistake, so it becomes an error.

use bottles_catalog::{load_product_config, CatalogSource};
use bottles_configurator::{AutoMatchPolicy, SelectionController};
use bottles_core::AppConfig;

use crate::SelectArgs;

pub(crate) async fn build_controller<S>(
    source: &S,
    config: &AppConfig,
    select: &SelectArgs,
) -> anyhow::Result<SelectionController>
where
    S: CatalogSource + ?Sized,
{
    let product = load_product_config(source, &select.product_id)
        .await
        .map_err(|e| anyhow::anyhow!("{}: {e}", e.user_message()))?;

    let mut ctl = SelectionController::new(product, AutoMatchPolicy::from_app_config(config));
    apply_selection(&mut ctl, select)?;
    Ok(ctl)
}

/// Applies glass, then fitment, then cap, so a cap swatch on a fused product
/// gets the final say over the fitment.
pub(crate) fn apply_selection(
    ctl: &mut SelectionController,
    select: &SelectArgs,
) -> anyhow::Result<()> {
    let product_id = ctl.config().id.clone();

    if let Some(glass) = select.glass.as_deref() {
        if !ctl.select_glass(glass) {
            anyhow::bail!("glass '{glass}' is not offered on {product_id}");
        }
    }

    if select.no_fitment {
        ctl.select_fitment(None);
    } else if let Some(fitment) = select.fitment.as_deref() {
        if !ctl.select_fitment(Some(fitment)) {
            anyhow::bail!("fitment '{fitment}' is not offered on {product_id}");
        }
    }

    if let Some(cap) = select.cap.as_deref() {
        if !ctl.select_cap(cap) {
            let offered: Vec<&str> = if ctl.config().is_fused() {
                ctl.config().cap_swatches().iter().map(|s| s.id.as_str()).collect()
            } else {
                ctl.config().cap_options().iter().map(|c| c.id.as_str()).collect()
            };
            anyhow::bail!(
                "cap '{cap}' is not offered on {product_id} (choose one of: {})",
                offered.join(", ")
            );
        }
    }

    Ok(())
}
