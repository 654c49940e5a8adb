//! Product view session.
//!
//! A view owns at most one product at a time. Each fetch is tagged with a
//! [`LoadTicket`]; a result whose ticket no longer matches the active view
//! (the shopper navigated away or closed the view first) is discarded.

use std::sync::Arc;

use bottles_catalog::{load_product_config, CatalogSource, LoadError, LOAD_FAILURE_MESSAGE};
use bottles_core::ProductConfig;

use crate::controller::SelectionController;
use crate::rules::AutoMatchPolicy;

/// Identifies one load request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    pub product_id: String,
    generation: u64,
}

#[derive(Debug, Clone)]
pub enum ViewState {
    Idle,
    Loading { product_id: String },
    Ready(Box<SelectionController>),
    /// Terminal for this view; reopening starts a fresh load.
    Failed { product_id: String, message: String },
}

/// What [`ConfiguratorView::complete_load`] did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadApplied {
    Ready,
    Failed,
    /// The ticket was superseded; the result was dropped.
    Stale,
}

#[derive(Debug, Clone)]
pub struct ConfiguratorView {
    policy: AutoMatchPolicy,
    generation: u64,
    state: ViewState,
}

impl ConfiguratorView {
    #[must_use]
    pub fn new(policy: AutoMatchPolicy) -> Self {
        Self {
            policy,
            generation: 0,
            state: ViewState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    #[must_use]
    pub fn controller(&self) -> Option<&SelectionController> {
        match &self.state {
            ViewState::Ready(ctl) => Some(ctl.as_ref()),
            _ => None,
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut SelectionController> {
        match &mut self.state {
            ViewState::Ready(ctl) => Some(ctl.as_mut()),
            _ => None,
        }
    }

    /// User-facing error text when the view failed to load.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ViewState::Failed { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn active_product_id(&self) -> Option<&str> {
        match &self.state {
            ViewState::Idle => None,
            ViewState::Loading { product_id } | ViewState::Failed { product_id, .. } => {
                Some(product_id.as_str())
            }
            ViewState::Ready(ctl) => Some(ctl.config().id.as_str()),
        }
    }

    /// Starts a load for `product_id`, superseding any pending one.
    pub fn begin_load(&mut self, product_id: &str) -> LoadTicket {
        self.generation += 1;
        self.state = ViewState::Loading {
            product_id: product_id.to_string(),
        };
        LoadTicket {
            product_id: product_id.to_string(),
            generation: self.generation,
        }
    }

    /// Applies a fetch result if `ticket` is still the active request.
    pub fn complete_load(
        &mut self,
        ticket: &LoadTicket,
        result: Result<Arc<ProductConfig>, LoadError>,
    ) -> LoadApplied {
        let active = matches!(
            &self.state,
            ViewState::Loading { product_id }
                if *product_id == ticket.product_id && ticket.generation == self.generation
        );
        if !active {
            tracing::debug!(
                product_id = %ticket.product_id,
                "discarding load result for a replaced view"
            );
            return LoadApplied::Stale;
        }

        match result {
            Ok(config) => {
                let ctl = SelectionController::new(config, self.policy.clone());
                self.state = ViewState::Ready(Box::new(ctl));
                LoadApplied::Ready
            }
            Err(e) => {
                tracing::warn!(
                    product_id = %ticket.product_id,
                    error = %e,
                    "product view failed to load"
                );
                self.state = ViewState::Failed {
                    product_id: ticket.product_id.clone(),
                    message: LOAD_FAILURE_MESSAGE.to_string(),
                };
                LoadApplied::Failed
            }
        }
    }

    /// Closes the view; any load still in flight becomes stale.
    pub fn close(&mut self) {
        self.generation += 1;
        self.state = ViewState::Idle;
    }

    /// Loads `product_id` from `source` and applies the result.
    pub async fn open<S>(&mut self, source: &S, product_id: &str) -> LoadApplied
    where
        S: CatalogSource + ?Sized,
    {
        let ticket = self.begin_load(product_id);
        let result = load_product_config(source, product_id).await;
        self.complete_load(&ticket, result)
    }
}
