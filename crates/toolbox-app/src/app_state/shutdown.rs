//! Graceful shutdown.

use super::core::ToolboxApp;

impl ToolboxApp {
    /// Close pop-outs and tear down views before the main window goes.
    pub(super) fn shutdown(&mut self) {
        tracing::info!(
            popups = self.launcher.broadcaster().open_windows(),
            panes = self.launcher.active_tools().len(),
            "Initiating graceful shutdown"
        );
        self.popups.clear();
        self.should_exit = true;
    }
}
