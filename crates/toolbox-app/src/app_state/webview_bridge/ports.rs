//! Launcher ports implemented over the main window and the sidebar view.

use serde_json::json;
use toolbox_common::{LauncherError, Theme, ToolDescriptor, ToolId, ViewId};
use toolbox_config::schema::LauncherConfig;
use toolbox_tiling::{LayoutSignal, MenuPlacement, PaneHost, Presenter};
use toolbox_webview::{WebViewConfig, WebViewHandle, WebViewManager};
use winit::window::Window;

// =============================================================================
// PANE HOST
// =============================================================================

/// Creates pane views as children of the main window.
///
/// Views start with empty bounds; `sync_bounds` places them once the
/// launcher has registered the pane.
pub struct WryPaneHost<'a> {
    window: &'a Window,
    manager: &'a WebViewManager,
}

impl<'a> WryPaneHost<'a> {
    pub fn new(window: &'a Window, manager: &'a WebViewManager) -> Self {
        Self { window, manager }
    }
}

impl PaneHost for WryPaneHost<'_> {
    type View = WebViewHandle;

    fn create_view(
        &mut self,
        view_id: ViewId,
        tool: &ToolDescriptor,
    ) -> Result<WebViewHandle, LauncherError> {
        let config = WebViewConfig::for_tool(&tool.path);
        self.manager
            .create(view_id, self.window, wry::Rect::default(), config)
            .map_err(|e| LauncherError::ViewCreation {
                tool: tool.id.clone(),
                reason: e.to_string(),
            })
    }
}

// =============================================================================
// SIDEBAR PRESENTER
// =============================================================================

/// Renders launcher state into the sidebar page over IPC.
pub struct SidebarPresenter<'a> {
    sidebar: &'a WebViewHandle,
}

impl<'a> SidebarPresenter<'a> {
    pub fn new(sidebar: &'a WebViewHandle) -> Self {
        Self { sidebar }
    }

    /// Send the tool catalog and the sidebar geometry so the page can build
    /// its checkboxes inside the column the panes leave free.
    pub fn render_tools(&mut self, tools: &[ToolDescriptor], layout: &LauncherConfig) {
        self.send("tools", tools_payload(tools, layout));
    }

    fn send(&self, kind: &str, payload: serde_json::Value) {
        if let Err(e) = self.sidebar.send_ipc(kind, &payload) {
            tracing::warn!(kind, error = %e, "Failed to update sidebar");
        }
    }
}

impl Presenter for SidebarPresenter<'_> {
    fn set_checked(&mut self, tool: &ToolId, checked: bool) {
        self.send("set_checked", json!({ "id": tool, "checked": checked }));
    }

    fn alert(&mut self, message: &str) {
        self.send("alert", json!({ "message": message }));
    }

    fn render_panes(&mut self, signal: &LayoutSignal) {
        match serde_json::to_value(signal) {
            Ok(value) => self.send("panes", value),
            Err(e) => tracing::warn!(error = %e, "Failed to serialize layout signal"),
        }
    }

    fn render_menu(&mut self, menu: Option<&MenuPlacement>) {
        let payload = match menu {
            Some(m) => json!({
                "id": m.request.tool,
                "x": m.position.x,
                "y": m.position.y,
            }),
            None => serde_json::Value::Null,
        };
        self.send("menu", payload);
    }

    fn render_theme(&mut self, theme: Theme) {
        self.send("theme", json!({ "theme": theme.as_str() }));
    }
}

fn tools_payload(tools: &[ToolDescriptor], layout: &LauncherConfig) -> serde_json::Value {
    let entries: Vec<_> = tools
        .iter()
        .map(|t| json!({ "id": t.id, "title": t.display_title() }))
        .collect();
    json!({
        "tools": entries,
        "sidebar_width": layout.sidebar_width,
        "gap": layout.gap,
    })
}

// =============================================================================
// TESTS
// =============================================================================
