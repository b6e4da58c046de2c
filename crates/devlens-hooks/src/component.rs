//! Component-side collaborator shapes.

use serde::{Deserialize, Serialize};

use crate::handles::define_record;

/// Rectangle describing where a component is rendered on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ComponentBounds {
    /// Distance from the left edge of the viewport, in pixels.
    pub left: f64,
    /// Distance from the top edge of the viewport, in pixels.
    pub top: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl ComponentBounds {
    /// Creates a new bounds rectangle.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Returns whether the rectangle covers no visible area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

define_record!(
    /// A node in the component tree as shown by the inspector.
    ComponentTreeNode
);

define_record!(
    /// Detailed state of a single component, as produced by `inspectComponent`.
    InspectedComponentData
);

define_record!(
    /// Per-component devtools options declared by the component author.
    ComponentDevtoolsOptions
);
