//! Pop-out tool windows.

use std::collections::HashMap;
use std::rc::{Rc, Weak};

use toolbox_common::{DeliveryError, FrameMessage, LauncherError, Rect, ToolDescriptor, ToolId, ViewId};
use toolbox_tiling::{ExternalWindow, ThemeTarget, WindowFeatures, WindowOpener};
use toolbox_webview::{WebViewConfig, WebViewHandle, WebViewManager};
use winit::dpi::{LogicalPosition, LogicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

use super::bounds::rect_to_wry;

/// A top-level window showing a single tool.
///
/// Field order is drop order: the view goes before its window.
pub struct PopupWindow {
    pub webview: WebViewHandle,
    pub window: Window,
    pub tool: ToolId,
}

impl PopupWindow {
    fn full_bounds(window: &Window) -> Rect {
        let size: LogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());
        Rect {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Stretch the view over the whole window.
    pub fn fit(&self) {
        let bounds = rect_to_wry(&Self::full_bounds(&self.window));
        if let Err(e) = self.webview.set_bounds(bounds) {
            tracing::warn!(tool = %self.tool, error = %e, "Failed to resize tool window view");
        }
    }
}

// =============================================================================
// HANDLE
// =============================================================================

/// Weak reference kept by the theme broadcaster. Goes stale once the app
/// drops the window on close.
#[derive(Clone)]
pub struct PopupHandle(Weak<PopupWindow>);

impl PopupHandle {
    pub fn new(popup: &Rc<PopupWindow>) -> Self {
        Self(Rc::downgrade(popup))
    }
}

impl ThemeTarget for PopupHandle {
    fn post_message(&self, message: &FrameMessage) -> Result<(), DeliveryError> {
        match self.0.upgrade() {
            Some(popup) => popup.webview.post_message(message),
            None => Err(DeliveryError::TargetClosed),
        }
    }
}

impl ExternalWindow for PopupHandle {
    fn is_open(&self) -> bool {
        self.0.upgrade().is_some()
    }
}

// =============================================================================
// OPENER
// =============================================================================

/// Opens pop-out windows on the running event loop.
pub struct PopupOpener<'a> {
    pub event_loop: &'a ActiveEventLoop,
    pub manager: &'a WebViewManager,
    pub popups: &'a mut HashMap<WindowId, Rc<PopupWindow>>,
    pub next_view: &'a mut u32,
}

impl PopupOpener<'_> {
    fn allocate_view_id(&mut self) -> ViewId {
        let id = ViewId(*self.next_view);
        *self.next_view += 1;
        id
    }
}

impl WindowOpener for PopupOpener<'_> {
    type Window = PopupHandle;

    fn open_window(
        &mut self,
        tool: &ToolDescriptor,
        features: &WindowFeatures,
    ) -> Result<PopupHandle, LauncherError> {
        let window_error = |reason: String| LauncherError::WindowOpen {
            tool: tool.id.clone(),
            reason,
        };

        let attrs = WindowAttributes::default()
            .with_title(tool.display_title())
            .with_inner_size(LogicalSize::new(features.width as f64, features.height as f64))
            .with_position(LogicalPosition::new(features.left as f64, features.top as f64))
            .with_resizable(true);
        let window = self
            .event_loop
            .create_window(attrs)
            .map_err(|e| window_error(e.to_string()))?;

        let view_id = self.allocate_view_id();
        let bounds = rect_to_wry(&PopupWindow::full_bounds(&window));
        let webview = self
            .manager
            .create(view_id, &window, bounds, WebViewConfig::for_tool(&tool.path))
            .map_err(|e| window_error(e.to_string()))?;

        tracing::debug!(tool = %tool.id, %view_id, url = webview.url(), "Tool window created");

        let window_id = window.id();
        let popup = Rc::new(PopupWindow {
            webview,
            window,
            tool: tool.id.clone(),
        });
        let handle = PopupHandle::new(&popup);
        self.popups.insert(window_id, popup);
        Ok(handle)
    }
}
