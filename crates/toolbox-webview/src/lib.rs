//! WebView bridge for tool panes, pop-out windows, and the launcher sidebar.
//!
//! Wraps the `wry` crate to provide:
//! - Managed views, embedded as children or filling their own window
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - A `toolbox://` custom protocol serving the tool pages
//! - A navigation allowlist
//! - Cross-document theme messages via `window.postMessage`

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;

pub use content::{content_url, ContentProvider};
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{NavigationPolicy, WebViewConfig, WebViewHandle, WebViewManager};
