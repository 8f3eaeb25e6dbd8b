//! Context menu state and pop-out window types.

use serde::{Deserialize, Serialize};
use toolbox_common::{Point, ToolId};

/// A right-click on a tool entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextMenuRequest {
    pub tool: ToolId,
    pub path: String,
    pub cursor: Point,
}

/// Measured sizes reported by the sidebar along with a right-click.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MenuMetrics {
    pub menu_width: f64,
    pub menu_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl MenuMetrics {
    /// Limit the viewport to the leftmost `width` pixels. The sidebar page
    /// spans the whole window but panes cover everything right of its
    /// column.
    pub fn clipped_to_width(self, width: f64) -> Self {
        Self {
            viewport_width: self.viewport_width.min(width),
            ..self
        }
    }
}

/// Where the menu is drawn: the request plus its clamped origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuPlacement {
    pub request: ContextMenuRequest,
    pub position: Point,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum MenuState {
    #[default]
    Hidden,
    Shown(MenuPlacement),
}

/// Size and position of a pop-out window, with the fixed chrome-less flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowFeatures {
    pub width: u32,
    pub height: u32,
    pub left: i32,
    pub top: i32,
}
