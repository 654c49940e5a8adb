pub mod compositor;
pub mod controller;
pub mod order;
pub mod reconcile;
pub mod rules;
pub mod selection;
pub mod surface;
pub mod view;

#[cfg(test)]
mod test_fixtures;

pub use compositor::{derive, CompositeView, LayerImage, LayerRole};
pub use controller::SelectionController;
pub use order::{to_cart_line, CartAttribute, CartLine};
pub use reconcile::{reconcile, Change};
pub use rules::{auto_match_fitment, suppresses_fitment, AutoMatch, AutoMatchPolicy};
pub use selection::Selection;
pub use surface::{
    render_plan, selector_panel, Canvas, PlacedLayer, RenderPlan, SelectorOption, SelectorPanel,
    DEFAULT_CANVAS_SIZE,
};
pub use view::{ConfiguratorView, LoadApplied, LoadTicket, ViewState};
