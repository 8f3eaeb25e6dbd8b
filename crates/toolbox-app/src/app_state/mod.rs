//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Wires the launcher state machine to the main window, the
//! sidebar view, tool panes, and pop-out windows.

mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;
mod webview_bridge;

pub use core::ToolboxApp;
