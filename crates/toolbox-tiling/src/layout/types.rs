//! Grid arrangement types and layout engine configuration.

use serde::{Deserialize, Serialize};
use toolbox_common::ToolId;

/// How the active panes are arranged in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridArrangement {
    /// No panes; the placeholder is shown.
    Empty,
    Single,
    /// Two columns.
    SideBySide,
    /// Two panes on top, one full-width pane below.
    TwoOverOne,
    /// 2×2.
    Quad,
}

impl GridArrangement {
    /// Arrangement for `count` panes. Counts above four use the quad grid
    /// and only the first four panes get a slot.
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            1 => Self::Single,
            2 => Self::SideBySide,
            3 => Self::TwoOverOne,
            _ => Self::Quad,
        }
    }

    pub fn slots(self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single => 1,
            Self::SideBySide => 2,
            Self::TwoOverOne => 3,
            Self::Quad => 4,
        }
    }
}

/// Recomputed after every admission or eviction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSignal {
    pub count: usize,
    pub arrangement: GridArrangement,
    /// Active tools in admission order.
    pub tools: Vec<ToolId>,
}

impl LayoutSignal {
    pub fn new(tools: Vec<ToolId>) -> Self {
        Self {
            count: tools.len(),
            arrangement: GridArrangement::for_count(tools.len()),
            tools,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Configuration for the engine that computes pane rectangles.
#[derive(Debug, Clone)]
pub struct GridLayout {
    /// Gap in pixels between panes.
    pub gap: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self { gap: 6 }
    }
}
