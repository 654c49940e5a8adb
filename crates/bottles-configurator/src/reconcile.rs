//! Selection reconciliation.
//!
//! Every mutation funnels through [`reconcile`], which repairs ids that no
//! longer belong to the product and applies the cap → fitment auto-match on
//! fused products. Fitment changes never rewrite the cap.

use bottles_core::ProductConfig;

use crate::rules::{auto_match_fitment, AutoMatch, AutoMatchPolicy};
use crate::selection::Selection;

/// What triggered a reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Glass,
    Fitment,
    Cap,
    /// A fresh product snapshot replaced the previous one.
    Reload,
}

/// Returns `selection` repaired against `config`, with auto-match applied
/// when `change` calls for it. A reload re-matches only when the stored
/// fitment was dropped as stale.
///
/// Repairs: an unknown glass becomes the default glass; an unknown fitment
/// becomes none, matching how [`crate::derive`] renders it. On products with
/// real caps an unknown or missing cap becomes the first cap option and the
/// swatch is cleared; on fused products the cap is cleared and an unknown
/// swatch is dropped.
#[must_use]
pub fn reconcile(
    config: &ProductConfig,
    policy: &AutoMatchPolicy,
    mut selection: Selection,
    change: Change,
) -> Selection {
    if config.glass(&selection.glass).is_none() {
        tracing::debug!(
            product_id = %config.id,
            stale = %selection.glass,
            "glass no longer offered, using default"
        );
        selection.glass = config.default_glass().id.clone();
    }

    let mut fitment_dropped = false;
    if let Some(id) = selection.fitment.as_deref() {
        if config.fitment(id).is_none() {
            tracing::debug!(product_id = %config.id, stale = id, "fitment no longer offered");
            selection.fitment = None;
            fitment_dropped = true;
        }
    }

    if config.is_fused() {
        selection.cap = None;
        if let Some(id) = selection.cap_swatch.as_deref() {
            if config.cap_swatch(id).is_none() {
                tracing::debug!(
                    product_id = %config.id,
                    stale = id,
                    "cap swatch no longer offered"
                );
                selection.cap_swatch = None;
            }
        }
    } else {
        selection.cap_swatch = None;
        let valid = selection
            .cap
            .as_deref()
            .is_some_and(|id| config.cap(id).is_some());
        if !valid {
            selection.cap = config.cap_options().first().map(|c| c.id.clone());
        }
    }

    // A reload only re-matches to replace a fitment the new snapshot dropped.
    let rematch = match change {
        Change::Cap => true,
        Change::Reload => fitment_dropped,
        Change::Glass | Change::Fitment => false,
    };
    if rematch && config.is_fused() {
        apply_auto_match(config, policy, &mut selection);
    }

    selection
}

fn apply_auto_match(config: &ProductConfig, policy: &AutoMatchPolicy, selection: &mut Selection) {
    let Some(swatch) = selection
        .cap_swatch
        .as_deref()
        .and_then(|id| config.cap_swatch(id))
    else {
        return;
    };

    let outcome = auto_match_fitment(config.fitment_options(), swatch, policy);
    match outcome.fitment() {
        Some(fitment) => {
            tracing::debug!(
                product_id = %config.id,
                swatch = %swatch.id,
                fitment_id = %fitment.id,
                exact = matches!(outcome, AutoMatch::Exact(_)),
                fallback = matches!(outcome, AutoMatch::Fallback(_)),
                "auto-matched fitment to cap swatch"
            );
            selection.fitment = Some(fitment.id.clone());
        }
        None => {
            tracing::debug!(
                product_id = %config.id,
                swatch = %swatch.id,
                "no fitment matches cap swatch, keeping current fitment"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{fused_sprayer, roll_on};

    fn fused_with_swatch(swatch: &str, fitment: Option<&str>) -> Selection {
        Selection {
            glass: "glass-clear".to_string(),
            fitment: fitment.map(str::to_string),
            cap: None,
            cap_swatch: Some(swatch.to_string()),
        }
    }

    #[test]
    fn repairs_stale_glass_fitment_and_cap() {
        let config = roll_on();
        let stale = Selection {
            glass: "glass-gone".to_string(),
            fitment: Some("fitment-gone".to_string()),
            cap: Some("cap-gone".to_string()),
            cap_swatch: Some("shiny-gold".to_string()),
        };
        let repaired = reconcile(&config, &AutoMatchPolicy::default(), stale, Change::Reload);
        assert_eq!(repaired.glass, "glass-clear");
        assert_eq!(repaired.fitment, None);
        assert_eq!(repaired.cap.as_deref(), Some("cap-gold-shiny"));
        assert_eq!(repaired.cap_swatch, None);
    }

    #[test]
    fn keeps_valid_selection_untouched() {
        let config = roll_on();
        let selection = Selection {
            glass: "glass-frosted".to_string(),
            fitment: None,
            cap: Some("cap-black-flat".to_string()),
            cap_swatch: None,
        };
        let out = reconcile(
            &config,
            &AutoMatchPolicy::default(),
            selection.clone(),
            Change::Cap,
        );
        assert_eq!(out, selection);
    }

    #[test]
    fn cap_change_on_fused_product_rematches_fitment() {
        let config = fused_sprayer();
        let out = reconcile(
            &config,
            &AutoMatchPolicy::default(),
            fused_with_swatch("shiny-gold", Some("fitment-sprayer-black-matte")),
            Change::Cap,
        );
        assert_eq!(out.fitment.as_deref(), Some("fitment-sprayer-gold-shiny"));
    }

    #[test]
    fn fitment_change_never_rewrites_swatch_or_rematches() {
        let config = fused_sprayer();
        let out = reconcile(
            &config,
            &AutoMatchPolicy::default(),
            fused_with_swatch("shiny-gold", Some("fitment-sprayer-black-matte")),
            Change::Fitment,
        );
        assert_eq!(out.fitment.as_deref(), Some("fitment-sprayer-black-matte"));
        assert_eq!(out.cap_swatch.as_deref(), Some("shiny-gold"));
    }

    #[test]
    fn reload_keeps_valid_manual_fitment() {
        let config = fused_sprayer();
        let selection = fused_with_swatch("shiny-gold", Some("fitment-sprayer-black-matte"));
        let out = reconcile(
            &config,
            &AutoMatchPolicy::default(),
            selection.clone(),
            Change::Reload,
        );
        assert_eq!(out, selection);
    }

    #[test]
    fn reload_rematches_when_stale_fitment_dropped() {
        let config = fused_sprayer();
        let out = reconcile(
            &config,
            &AutoMatchPolicy::default(),
            fused_with_swatch("shiny-gold", Some("fitment-sprayer-retired")),
            Change::Reload,
        );
        assert_eq!(out.fitment.as_deref(), Some("fitment-sprayer-gold-shiny"));
    }

    #[test]
    fn auto_match_miss_leaves_fitment_unchanged() {
        let config = fused_sprayer();
        let out = reconcile(
            &config,
            &AutoMatchPolicy::default(),
            fused_with_swatch("shiny-white", Some("fitment-sprayer-gold-matte")),
            Change::Cap,
        );
        assert_eq!(out.fitment.as_deref(), Some("fitment-sprayer-gold-matte"));
    }

    #[test]
    fn fused_product_drops_cap_id_and_unknown_swatch() {
        let config = fused_sprayer();
        let mut selection = fused_with_swatch("neon-green", Some("fitment-sprayer-chrome"));
        selection.cap = Some("cap-gold-shiny".to_string());
        let out = reconcile(&config, &AutoMatchPolicy::default(), selection, Change::Reload);
        assert_eq!(out.cap, None);
        assert_eq!(out.cap_swatch, None);
        assert_eq!(out.fitment.as_deref(), Some("fitment-sprayer-chrome"));
    }
}
