//! Internal types and constants for the app state module.

use std::time::Duration;

use toolbox_common::{Rect, ViewId};

/// How often to drain webview events when nothing else is scheduled.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// The launcher sidebar. Pane views are numbered from 1.
pub(super) const SIDEBAR_VIEW: ViewId = ViewId(0);

/// Pop-out window views are numbered from here so they never collide with
/// pane views.
pub(super) const POPUP_VIEW_BASE: u32 = 1 << 24;

/// Content path the sidebar is served under.
pub(super) const SIDEBAR_PATH: &str = "__launcher/index.html";

/// Used when the monitor is unknown.
pub(super) const FALLBACK_SCREEN: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1920.0,
    height: 1080.0,
};
