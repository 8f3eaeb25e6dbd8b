//! IPC message validation and dispatch from the sidebar to the launcher.

use std::time::Instant;

use serde::Deserialize;
use toolbox_common::{Point, ToolId, ViewId};
use toolbox_tiling::MenuMetrics;
use toolbox_webview::IpcMessage;
use winit::event_loop::ActiveEventLoop;

use crate::app_state::core::ToolboxApp;
use crate::app_state::types::SIDEBAR_VIEW;

use super::popup::PopupOpener;
use super::ports::{SidebarPresenter, WryPaneHost};

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Allowed IPC message kinds from the sidebar.
///
/// Any message with a `kind` not in this list is rejected and logged.
const ALLOWED_IPC_KINDS: &[&str] = &[
    "ready",
    "tool_toggle",
    "theme_toggle",
    "context_menu",
    "menu_dismiss",
    "menu_open_window",
];

/// Check whether an IPC message kind is in the allowlist.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    ALLOWED_IPC_KINDS.contains(&kind)
}

// =============================================================================
// COMMANDS
// =============================================================================

#[derive(Debug, Deserialize)]
struct TogglePayload {
    id: ToolId,
    checked: bool,
}

#[derive(Debug, Deserialize)]
struct ContextMenuPayload {
    id: ToolId,
    x: f64,
    y: f64,
    metrics: MenuMetrics,
}

/// A validated request from the sidebar page.
#[derive(Debug, Clone, PartialEq)]
pub enum SidebarCommand {
    /// The page finished wiring its handlers and wants the full state.
    Ready,
    ToggleTool { id: ToolId, checked: bool },
    ToggleTheme,
    ShowMenu {
        id: ToolId,
        cursor: Point,
        metrics: MenuMetrics,
    },
    DismissMenu,
    OpenInNewWindow,
}

impl SidebarCommand {
    /// `None` for unknown kinds and malformed payloads.
    pub fn parse(msg: &IpcMessage) -> Option<Self> {
        if !is_ipc_kind_allowed(&msg.kind) {
            return None;
        }
        match msg.kind.as_str() {
            "ready" => Some(Self::Ready),
            "tool_toggle" => {
                let p: TogglePayload = msg.payload.parse()?;
                Some(Self::ToggleTool {
                    id: p.id,
                    checked: p.checked,
                })
            }
            "theme_toggle" => Some(Self::ToggleTheme),
            "context_menu" => {
                let p: ContextMenuPayload = msg.payload.parse()?;
                Some(Self::ShowMenu {
                    id: p.id,
                    cursor: Point::new(p.x, p.y),
                    metrics: p.metrics,
                })
            }
            "menu_dismiss" => Some(Self::DismissMenu),
            "menu_open_window" => Some(Self::OpenInNewWindow),
            _ => None,
        }
    }
}

// =============================================================================
// DISPATCH
// =============================================================================

/// Only the sidebar may drive the launcher; tool pages and pop-outs are
/// untrusted content.
fn accepts_commands_from(view_id: ViewId) -> bool {
    view_id == SIDEBAR_VIEW
}

impl ToolboxApp {
    /// Handle a single IPC message from a view. Only the sidebar may send
    /// commands; tool pages are untrusted.
    pub(in crate::app_state) fn handle_ipc_message(
        &mut self,
        event_loop: &ActiveEventLoop,
        view_id: ViewId,
        body: &str,
    ) {
        if !accepts_commands_from(view_id) {
            tracing::debug!(%view_id, "IPC from tool view ignored");
            return;
        }

        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(body_len = body.len(), "IPC message rejected: failed to parse");
                return;
            }
        };

        let command = match SidebarCommand::parse(&msg) {
            Some(c) => c,
            None => {
                tracing::warn!(kind = %msg.kind, "IPC message rejected: unknown kind or bad payload");
                return;
            }
        };

        tracing::debug!(kind = %msg.kind, "IPC message dispatched");
        self.run_sidebar_command(event_loop, command);
    }

    fn run_sidebar_command(&mut self, event_loop: &ActiveEventLoop, command: SidebarCommand) {
        let Some(shell) = &self.shell else {
            return;
        };
        let mut presenter = SidebarPresenter::new(&shell.sidebar);

        match command {
            SidebarCommand::Ready => {
                presenter.render_tools(self.launcher.tools(), &self.config.launcher);
                self.launcher.present(&mut presenter);
            }
            SidebarCommand::ToggleTool { id, checked } => {
                let mut host = WryPaneHost::new(&shell.window, &shell.manager);
                if let Err(e) = self.launcher.toggle_tool(&id, checked, &mut host, &mut presenter) {
                    tracing::info!(tool = %id, "{e}");
                }
            }
            SidebarCommand::ToggleTheme => {
                self.launcher.toggle_theme(&mut presenter);
            }
            SidebarCommand::ShowMenu {
                id,
                cursor,
                metrics,
            } => {
                if let Err(e) = self.launcher.show_menu(&id, cursor, &metrics, &mut presenter) {
                    tracing::warn!("{e}");
                }
            }
            SidebarCommand::DismissMenu => {
                self.launcher.dismiss_menu(&mut presenter);
            }
            SidebarCommand::OpenInNewWindow => {
                let screen = shell.screen_area();
                let mut opener = PopupOpener {
                    event_loop,
                    manager: &shell.manager,
                    popups: &mut self.popups,
                    next_view: &mut self.next_popup_view,
                };
                if let Err(e) =
                    self.launcher
                        .open_in_new_window(&mut opener, &mut presenter, screen, Instant::now())
                {
                    tracing::warn!("{e}");
                }
            }
        }

        self.sync_bounds();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::types::POPUP_VIEW_BASE;

    fn parse(raw: &str) -> Option<SidebarCommand> {
        SidebarCommand::parse(&IpcMessage::from_json(raw).unwrap())
    }

    #[test]
    fn allowlist_accepts_sidebar_kinds() {
        for kind in ALLOWED_IPC_KINDS {
            assert!(is_ipc_kind_allowed(kind));
        }
    }

    #[test]
    fn allowlist_rejects_unknown() {
        assert!(!is_ipc_kind_allowed("pty_input"));
        assert!(!is_ipc_kind_allowed(""));
        assert!(!is_ipc_kind_allowed("TOOL_TOGGLE"));
    }

    #[test]
    fn only_sidebar_view_issues_commands() {
        assert!(accepts_commands_from(SIDEBAR_VIEW));
        assert!(!accepts_commands_from(ViewId(1)));
        assert!(!accepts_commands_from(ViewId(4)));
        assert!(!accepts_commands_from(ViewId(POPUP_VIEW_BASE)));
    }

    #[test]
    fn parses_tool_toggle() {
        let cmd = parse(r#"{"kind":"tool_toggle","payload":{"id":"timer","checked":true}}"#);
        assert_eq!(
            cmd,
            Some(SidebarCommand::ToggleTool {
                id: ToolId::new("timer"),
                checked: true
            })
        );
    }

    #[test]
    fn parses_context_menu() {
        let raw = r#"{"kind":"context_menu","payload":{"id":"email","x":120,"y":300,
            "metrics":{"menu_width":180,"menu_height":40,"viewport_width":240,"viewport_height":800}}}"#;
        match parse(raw) {
            Some(SidebarCommand::ShowMenu { id, cursor, metrics }) => {
                assert_eq!(id.as_str(), "email");
                assert_eq!(cursor, Point::new(120.0, 300.0));
                assert_eq!(metrics.viewport_width, 240.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn payloadless_commands() {
        assert_eq!(parse(r#"{"kind":"ready"}"#), Some(SidebarCommand::Ready));
        assert_eq!(parse(r#"{"kind":"theme_toggle"}"#), Some(SidebarCommand::ToggleTheme));
        assert_eq!(parse(r#"{"kind":"menu_dismiss"}"#), Some(SidebarCommand::DismissMenu));
        assert_eq!(
            parse(r#"{"kind":"menu_open_window","payload":null}"#),
            Some(SidebarCommand::OpenInNewWindow)
        );
    }

    #[test]
    fn rejects_bad_payloads() {
        assert_eq!(parse(r#"{"kind":"tool_toggle","payload":{"id":"timer"}}"#), None);
        assert_eq!(parse(r#"{"kind":"tool_toggle","payload":"timer"}"#), None);
        assert_eq!(parse(r#"{"kind":"context_menu","payload":{"id":"email","x":1,"y":2}}"#), None);
        assert_eq!(parse(r#"{"kind":"open_devtools"}"#), None);
    }
}
