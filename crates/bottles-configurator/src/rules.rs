//! Compatibility rules between layers.
//!
//! Two rules exist:
//!
//! - **Flat-cap exclusion**: a flat cap leaves no room for a roller or any
//!   other fitment, so the fitment is suppressed whenever the resolved cap is
//!   flat.
//! - **Cap → fitment auto-match** on fused products: the visible cap is the
//!   fitment's bundled overcap, so choosing a cap finish re-points the fitment
//!   to one whose overcap carries that finish.
//!
//! Both read the tagged attributes on [`Component`]; name inference only
//! applies to records without tags.

use std::collections::BTreeMap;

use bottles_core::config::DEFAULT_SILVER_FALLBACK_FITMENT;
use bottles_core::{AppConfig, CapSwatch, Color, Component};

/// `true` when `cap` forbids a fitment underneath it.
#[must_use]
pub fn suppresses_fitment(cap: Option<&Component>) -> bool {
    cap.is_some_and(Component::is_flat)
}

/// Per-color fallback fitments for auto-match misses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoMatchPolicy {
    fallbacks: BTreeMap<Color, String>,
}

impl Default for AutoMatchPolicy {
    /// Only silver has a fallback: the chrome sprayer.
    fn default() -> Self {
        Self::new(BTreeMap::from([(
            Color::Silver,
            DEFAULT_SILVER_FALLBACK_FITMENT.to_string(),
        )]))
    }
}

impl AutoMatchPolicy {
    #[must_use]
    pub fn new(fallbacks: BTreeMap<Color, String>) -> Self {
        Self { fallbacks }
    }

    /// A policy with no fallbacks at all.
    #[must_use]
    pub fn without_fallbacks() -> Self {
        Self::new(BTreeMap::new())
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new(config.automatch_fallbacks.clone())
    }

    #[must_use]
    pub fn with_fallback(mut self, color: Color, fitment_id: &str) -> Self {
        self.fallbacks.insert(color, fitment_id.to_string());
        self
    }

    #[must_use]
    pub fn fallback_for(&self, color: Color) -> Option<&str> {
        self.fallbacks.get(&color).map(String::as_str)
    }
}

/// Outcome of matching a cap swatch against the fitment options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutoMatch<'a> {
    /// Color and finish both match.
    Exact(&'a Component),
    /// First fitment in list order with the right color.
    ColorOnly(&'a Component),
    /// The policy's fallback fitment for the swatch color.
    Fallback(&'a Component),
    /// Nothing matched; the fitment selection stays as it is.
    Miss,
}

impl<'a> AutoMatch<'a> {
    #[must_use]
    pub fn fitment(self) -> Option<&'a Component> {
        match self {
            AutoMatch::Exact(c) | AutoMatch::ColorOnly(c) | AutoMatch::Fallback(c) => Some(c),
            AutoMatch::Miss => None,
        }
    }
}

/// Picks the fitment whose overcap best represents `swatch`.
///
/// Tie-break: exact color + finish wins; otherwise the first color-only match
/// in list order; otherwise the policy fallback for the color, if that fitment
/// is offered on this product.
#[must_use]
pub fn auto_match_fitment<'a>(
    fitments: &'a [Component],
    swatch: &CapSwatch,
    policy: &AutoMatchPolicy,
) -> AutoMatch<'a> {
    if let Some(finish) = swatch.finish {
        if let Some(exact) = fitments
            .iter()
            .find(|f| f.color() == Some(swatch.color) && f.finish() == Some(finish))
        {
            return AutoMatch::Exact(exact);
        }
    }

    if let Some(color_only) = fitments.iter().find(|f| f.color() == Some(swatch.color)) {
        return AutoMatch::ColorOnly(color_only);
    }

    if let Some(fallback) = policy
        .fallback_for(swatch.color)
        .and_then(|id| fitments.iter().find(|f| f.id == id))
    {
        return AutoMatch::Fallback(fallback);
    }

    AutoMatch::Miss
}
