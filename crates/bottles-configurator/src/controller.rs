use std::sync::Arc;

use bottles_core::{Component, ProductConfig};

use crate::compositor::{derive, CompositeView};
use crate::order::{to_cart_line, CartLine};
use crate::reconcile::{reconcile, Change};
use crate::rules::AutoMatchPolicy;
use crate::selection::Selection;

/// Holds the selection for one product view and keeps its composite current.
///
/// Mutators return `true` when the selection was applied. Ids outside the
/// product's option lists are ignored and leave the state untouched.
#[derive(Debug, Clone)]
pub struct SelectionController {
    config: Arc<ProductConfig>,
    policy: AutoMatchPolicy,
    selection: Selection,
    current: CompositeView,
}

impl SelectionController {
    /// Seeds the selection from the product defaults and derives the first
    /// composite before returning.
    #[must_use]
    pub fn new(config: Arc<ProductConfig>, policy: AutoMatchPolicy) -> Self {
        let selection = reconcile(
            &config,
            &policy,
            Selection::defaults(&config),
            Change::Reload,
        );
        let current = derive(&config, &selection);
        Self {
            config,
            policy,
            selection,
            current,
        }
    }

    #[must_use]
    pub fn config(&self) -> &Arc<ProductConfig> {
        &self.config
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[must_use]
    pub fn current(&self) -> &CompositeView {
        &self.current
    }

    /// The fitment actually rendered, after flat-cap suppression.
    #[must_use]
    pub fn effective_fitment(&self) -> Option<&Component> {
        self.current
            .fitment_id
            .as_deref()
            .and_then(|id| self.config.fitment(id))
    }

    pub fn select_glass(&mut self, glass_id: &str) -> bool {
        if self.config.glass(glass_id).is_none() {
            tracing::debug!(product_id = %self.config.id, glass_id, "ignoring unknown glass");
            return false;
        }
        let mut next = self.selection.clone();
        next.glass = glass_id.to_string();
        self.apply(next, Change::Glass);
        true
    }

    /// Selects a fitment, or clears it with `None`.
    pub fn select_fitment(&mut self, fitment_id: Option<&str>) -> bool {
        if let Some(id) = fitment_id {
            if self.config.fitment(id).is_none() {
                tracing::debug!(
                    product_id = %self.config.id,
                    fitment_id = id,
                    "ignoring unknown fitment"
                );
                return false;
            }
        }
        let mut next = self.selection.clone();
        next.fitment = fitment_id.map(str::to_string);
        self.apply(next, Change::Fitment);
        true
    }

    /// Selects a cap. On fused products `cap_id` names a cap swatch and the
    /// fitment is re-matched to carry that finish.
    pub fn select_cap(&mut self, cap_id: &str) -> bool {
        let mut next = self.selection.clone();
        if self.config.is_fused() {
            if self.config.cap_swatch(cap_id).is_none() {
                tracing::debug!(
                    product_id = %self.config.id,
                    swatch = cap_id,
                    "ignoring unknown cap swatch"
                );
                return false;
            }
            next.cap_swatch = Some(cap_id.to_string());
        } else {
            if self.config.cap(cap_id).is_none() {
                tracing::debug!(product_id = %self.config.id, cap_id, "ignoring unknown cap");
                return false;
            }
            next.cap = Some(cap_id.to_string());
        }
        self.apply(next, Change::Cap);
        true
    }

    /// Swaps in a fresh snapshot of the same product and repairs the
    /// selection against it.
    pub fn reload(&mut self, config: Arc<ProductConfig>) {
        self.config = config;
        self.apply(self.selection.clone(), Change::Reload);
    }

    #[must_use]
    pub fn cart_line(&self) -> CartLine {
        to_cart_line(&self.config, &self.selection)
    }

    fn apply(&mut self, next: Selection, change: Change) {
        self.selection = reconcile(&self.config, &self.policy, next, change);
        self.current = derive(&self.config, &self.selection);
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
