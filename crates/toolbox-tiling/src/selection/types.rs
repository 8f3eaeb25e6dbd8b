//! Core types and constructors for SelectionController.

use toolbox_common::{ToolId, ViewId};

use crate::layout::LayoutSignal;
use crate::registry::PaneRegistry;
use crate::viewport::ViewportMode;

/// Admits and evicts panes under the capacity and viewport constraints.
///
/// Wide viewports hold up to `capacity` panes. Narrow viewports are
/// exclusive: zero or one pane.
#[derive(Debug)]
pub struct SelectionController<V> {
    pub(super) registry: PaneRegistry<V>,
    pub(super) capacity: usize,
    pub(super) narrow_breakpoint: f64,
    pub(super) mode: ViewportMode,
}

/// Outcome of a successful admission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    Admitted {
        view_id: ViewId,
        /// Panes removed to make room (narrow mode only).
        evicted: Vec<ToolId>,
    },
    AlreadyActive,
}

impl<V> SelectionController<V> {
    pub fn new(capacity: usize, narrow_breakpoint: f64) -> Self {
        Self {
            registry: PaneRegistry::new(),
            capacity,
            narrow_breakpoint,
            mode: ViewportMode::Wide,
        }
    }

    // -- Accessors --

    pub fn registry(&self) -> &PaneRegistry<V> {
        &self.registry
    }

    pub fn mode(&self) -> ViewportMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    pub fn is_active(&self, id: &ToolId) -> bool {
        self.registry.contains(id)
    }

    pub fn active_ids(&self) -> Vec<ToolId> {
        self.registry.ids()
    }

    pub fn layout_signal(&self) -> LayoutSignal {
        LayoutSignal::new(self.registry.ids())
    }
}
