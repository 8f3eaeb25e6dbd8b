//! Core types and constructors for Launcher.

use toolbox_common::{Theme, ToolDescriptor, ToolId};
use toolbox_config::{ThemeStore, ToolboxConfig};

use crate::broadcast::ThemeBroadcaster;
use crate::layout::GridLayout;
use crate::menu::ContextMenuController;
use crate::ports::{ExternalWindow, ThemeTarget};
use crate::selection::SelectionController;

/// The launcher's process-wide state: tool catalog, active panes, theme,
/// pop-out windows, and the context menu.
///
/// All commands run on the event-loop thread. Ports are passed per call so
/// the state machine never owns a window or webview directly.
pub struct Launcher<V, W> {
    pub(super) config: ToolboxConfig,
    pub(super) selection: SelectionController<V>,
    pub(super) theme: ThemeStore,
    pub(super) broadcaster: ThemeBroadcaster<W>,
    pub(super) menu: ContextMenuController,
    pub(super) layout: GridLayout,
}

impl<V: ThemeTarget, W: ExternalWindow> Launcher<V, W> {
    pub fn new(config: &ToolboxConfig, theme: ThemeStore) -> Self {
        Self {
            selection: SelectionController::new(
                config.launcher.max_panes as usize,
                config.launcher.narrow_breakpoint as f64,
            ),
            broadcaster: ThemeBroadcaster::from_millis(&config.popup.retry_delays_ms),
            menu: ContextMenuController::new(),
            layout: GridLayout {
                gap: config.launcher.gap,
            },
            theme,
            config: config.clone(),
        }
    }

    // -- Accessors --

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.config.tools
    }

    pub fn tool(&self, id: &ToolId) -> Option<&ToolDescriptor> {
        self.config.tool(id)
    }

    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn selection(&self) -> &SelectionController<V> {
        &self.selection
    }

    pub fn menu(&self) -> &ContextMenuController {
        &self.menu
    }

    pub fn broadcaster(&self) -> &ThemeBroadcaster<W> {
        &self.broadcaster
    }

    pub fn active_tools(&self) -> Vec<ToolId> {
        self.selection.active_ids()
    }
}
