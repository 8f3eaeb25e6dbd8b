//! Pane layout and pop-out window configuration types.

use serde::{Deserialize, Serialize};

/// Pane admission and grid layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherConfig {
    /// Maximum number of panes on a wide viewport (valid range: 1-4).
    pub max_panes: u32,
    /// Viewport width at or below which only one pane is shown (valid range: 320-2000).
    pub narrow_breakpoint: u32,
    /// Gap between panes in pixels (valid range: 0-40).
    pub gap: u32,
    /// Width of the tool sidebar in pixels (valid range: 120-600).
    pub sidebar_width: u32,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            max_panes: 4,
            narrow_breakpoint: 768,
            gap: 6,
            sidebar_width: 240,
        }
    }
}

/// Settings for tools opened in their own window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupConfig {
    /// Size used when a tool has no preset window size.
    pub default_width: u32,
    pub default_height: u32,
    /// Delays after opening at which the current theme is re-sent (1-4 entries, each 0-10000).
    pub retry_delays_ms: Vec<u64>,
}

impl Default for PopupConfig {
    fn default() -> Self {
        Self {
            default_width: 800,
            default_height: 600,
            retry_delays_ms: vec![300, 1000],
        }
    }
}

/// Where tool pages are served from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory holding the tool pages. Relative paths resolve against the
    /// working directory.
    pub base_dir: String,
    /// Extra `https://` origins tools may navigate to.
    pub allowed_origins: Vec<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base_dir: "tools".into(),
            allowed_origins: Vec::new(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
