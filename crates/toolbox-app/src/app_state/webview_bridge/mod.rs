//! Bridge between the launcher state machine and the wry/winit views.
//!
//! Implements the launcher ports over real windows, dispatches sidebar IPC,
//! and keeps view bounds in sync with the pane grid.

mod bounds;
mod ipc_dispatch;
mod lifecycle;
mod popup;
mod ports;

pub(super) use bounds::{monitor_area, rect_to_wry};
pub(super) use popup::{PopupHandle, PopupWindow};
pub(super) use ports::{SidebarPresenter, WryPaneHost};

/// Launcher sidebar page, served from memory.
pub(super) const SIDEBAR_HTML: &str = include_str!("../../assets/launcher.html");
