//! Configuration schema types for the launcher.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod layout;
mod theme;

pub use layout::*;
pub use theme::*;

use serde::{Deserialize, Serialize};
use toolbox_common::{Size, ToolDescriptor, ToolId};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change. Supplying any `[[tools]]` entry
/// replaces the built-in tool list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolboxConfig {
    pub launcher: LauncherConfig,
    pub popup: PopupConfig,
    pub content: ContentConfig,
    pub theme: ThemeConfig,
    pub tools: Vec<ToolDescriptor>,
}

impl Default for ToolboxConfig {
    fn default() -> Self {
        Self {
            launcher: LauncherConfig::default(),
            popup: PopupConfig::default(),
            content: ContentConfig::default(),
            theme: ThemeConfig::default(),
            tools: default_tools(),
        }
    }
}

impl ToolboxConfig {
    pub fn tool(&self, id: &ToolId) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| &t.id == id)
    }

    /// Window size for a tool opened on its own, falling back to the popup default.
    pub fn window_size_for(&self, id: &ToolId) -> Size {
        self.tool(id)
            .and_then(|t| t.window)
            .unwrap_or_else(|| Size::new(self.popup.default_width, self.popup.default_height))
    }
}

/// The tools shipped with the site.
pub fn default_tools() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            title: "Temp Mail".into(),
            ..ToolDescriptor::new("email", "email/index.html").with_window(900, 720)
        },
        ToolDescriptor {
            title: "Event Schedule".into(),
            ..ToolDescriptor::new("events", "EventsDuration/index.html").with_window(600, 760)
        },
        ToolDescriptor {
            title: "Russia Events".into(),
            ..ToolDescriptor::new("russia", "RussiaEvents/index.html").with_window(600, 760)
        },
        ToolDescriptor {
            title: "Timer".into(),
            ..ToolDescriptor::new("timer", "Timer_New/index.html").with_window(420, 560)
        },
        ToolDescriptor {
            title: "Unique Slots".into(),
            ..ToolDescriptor::new("uniqslots", "UniqSlots/index.html")
        },
    ]
}

// =============================================================================
// Tests
// =============================================================================
