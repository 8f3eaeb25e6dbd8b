//! Seams between the launcher state machine and the windowing layer.
//!
//! The launcher never touches a window, webview, or DOM directly. The
//! desktop shell implements these traits over wry/winit; tests implement
//! them with recorders.

use toolbox_common::{
    DeliveryError, FrameMessage, LauncherError, Theme, ToolDescriptor, ToolId, ViewId,
};

use crate::layout::LayoutSignal;
use crate::menu::{MenuPlacement, WindowFeatures};

/// Anything that can receive a cross-document message.
///
/// Delivery is at most once with no acknowledgment. An `Ok` only means the
/// message was handed to the target, not that a listener applied it.
pub trait ThemeTarget {
    fn post_message(&self, message: &FrameMessage) -> Result<(), DeliveryError>;
}

/// Creates embedded views for admitted panes.
pub trait PaneHost {
    type View: ThemeTarget;

    /// Build a view pointed at `tool.path`. The view reports load-complete
    /// later, tagged with `view_id`.
    fn create_view(
        &mut self,
        view_id: ViewId,
        tool: &ToolDescriptor,
    ) -> Result<Self::View, LauncherError>;
}

/// The launcher's own chrome: checkboxes, alerts, pane grid, context menu.
pub trait Presenter {
    fn set_checked(&mut self, tool: &ToolId, checked: bool);

    fn alert(&mut self, message: &str);

    /// Called after every admission or eviction. A zero count means the
    /// empty placeholder should be shown.
    fn render_panes(&mut self, signal: &LayoutSignal);

    /// `None` hides the menu.
    fn render_menu(&mut self, menu: Option<&MenuPlacement>);

    /// Apply the theme to the launcher's own presentation root.
    fn render_theme(&mut self, theme: Theme);
}

/// A top-level window opened for a single tool.
pub trait ExternalWindow: ThemeTarget + Clone {
    /// `false` once the user closed the window.
    fn is_open(&self) -> bool;
}

/// Opens tools in their own top-level windows.
pub trait WindowOpener {
    type Window: ExternalWindow;

    fn open_window(
        &mut self,
        tool: &ToolDescriptor,
        features: &WindowFeatures,
    ) -> Result<Self::Window, LauncherError>;
}
