//! ToolboxApp struct definition and constructor.

use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use toolbox_common::Rect;
use toolbox_config::{ThemeStore, ToolboxConfig};
use toolbox_tiling::Launcher;
use toolbox_webview::{WebViewHandle, WebViewManager};
use winit::dpi::LogicalSize;
use winit::window::{Window, WindowId};

use super::types::{FALLBACK_SCREEN, POPUP_VIEW_BASE};
use super::webview_bridge::{monitor_area, PopupHandle, PopupWindow};

/// The main window and the views that live for its whole lifetime.
///
/// Field order is drop order: the sidebar view goes before its window.
pub(super) struct Shell {
    pub(super) sidebar: WebViewHandle,
    pub(super) manager: WebViewManager,
    pub(super) window: Window,
}

impl Shell {
    /// Inner size in logical pixels.
    pub(super) fn logical_size(&self) -> (f64, f64) {
        let size: LogicalSize<f64> = self
            .window
            .inner_size()
            .to_logical(self.window.scale_factor());
        (size.width, size.height)
    }

    pub(super) fn bounds(&self) -> Rect {
        let (width, height) = self.logical_size();
        Rect {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    /// Area of the monitor the main window is on, in logical desktop
    /// coordinates.
    pub(super) fn screen_area(&self) -> Rect {
        match self.window.current_monitor() {
            Some(monitor) => {
                monitor_area(monitor.position(), monitor.size(), monitor.scale_factor())
            }
            None => FALLBACK_SCREEN,
        }
    }
}

/// Top-level application state.
///
/// Field order is drop order: pane views (inside the launcher) and pop-outs
/// are torn down before the main window.
pub struct ToolboxApp {
    pub(super) launcher: Launcher<WebViewHandle, PopupHandle>,
    pub(super) popups: HashMap<WindowId, Rc<PopupWindow>>,
    pub(super) shell: Option<Shell>,
    pub(super) config: ToolboxConfig,
    pub(super) tools_dir: PathBuf,
    pub(super) next_popup_view: u32,
    pub(super) should_exit: bool,
}

impl ToolboxApp {
    pub fn new(config: ToolboxConfig, theme: ThemeStore, tools_dir: PathBuf) -> Self {
        Self {
            launcher: Launcher::new(&config, theme),
            popups: HashMap::new(),
            shell: None,
            config,
            tools_dir,
            next_popup_view: POPUP_VIEW_BASE,
            should_exit: false,
        }
    }

    pub(super) fn is_main_window(&self, id: WindowId) -> bool {
        self.shell.as_ref().is_some_and(|s| s.window.id() == id)
    }
}
