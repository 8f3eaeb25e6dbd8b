//! View lifecycle: sync bounds, route webview events.

use toolbox_common::{FrameMessage, ViewId};
use toolbox_tiling::ThemeTarget;
use toolbox_webview::{PageLoadState, WebViewEvent};
use winit::event_loop::ActiveEventLoop;

use crate::app_state::core::ToolboxApp;

use super::bounds::{pane_area, rect_to_wry};

impl ToolboxApp {
    /// Place the sidebar over the whole window and each pane at its grid
    /// rect.
    pub(in crate::app_state) fn sync_bounds(&self) {
        let Some(shell) = &self.shell else {
            return;
        };

        if let Err(e) = shell.sidebar.set_bounds(rect_to_wry(&shell.bounds())) {
            tracing::warn!(error = %e, "Failed to set sidebar bounds");
        }

        let (width, height) = shell.logical_size();
        let launcher = &self.config.launcher;
        let area = pane_area(width, height, launcher.sidebar_width, launcher.gap);
        let registry = self.launcher.selection().registry();

        for (view_id, rect) in self.launcher.layout(area) {
            let Some(pane) = registry.by_view(view_id) else {
                continue;
            };
            if let Err(e) = pane.view.set_bounds(rect_to_wry(&rect)) {
                tracing::warn!(tool = %pane.tool.id, error = %e, "Failed to set pane bounds");
            }
        }
    }

    pub(in crate::app_state) fn handle_webview_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        event: WebViewEvent,
    ) {
        match event {
            WebViewEvent::PageLoad {
                view_id,
                state: PageLoadState::Finished,
                url,
            } => {
                tracing::debug!(%view_id, %url, "Page loaded");
                self.handle_page_loaded(view_id);
            }
            WebViewEvent::TitleChanged { view_id, title } => {
                if let Some(popup) = self.popups.values().find(|p| p.webview.view_id() == view_id) {
                    popup.window.set_title(&title);
                }
            }
            WebViewEvent::IpcMessage { view_id, body } => {
                self.handle_ipc_message(event_loop, view_id, &body);
            }
            WebViewEvent::NavigationRequested { view_id, url } => {
                tracing::debug!(%view_id, %url, "Navigation");
            }
            WebViewEvent::PageLoad { .. } => {}
        }
    }

    /// A view finished loading: panes get the theme through the launcher,
    /// pop-outs get it pushed directly.
    fn handle_page_loaded(&mut self, view_id: ViewId) {
        if self.launcher.view_loaded(view_id).is_some() {
            return;
        }

        let theme = self.launcher.theme();
        if let Some(popup) = self.popups.values().find(|p| p.webview.view_id() == view_id) {
            if let Err(e) = popup.webview.post_message(&FrameMessage::set_theme(theme)) {
                tracing::debug!(tool = %popup.tool, "theme not delivered: {e}");
            }
        }
    }
}
