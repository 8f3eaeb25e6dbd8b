//! WebView event types.

use serde::{Deserialize, Serialize};
use toolbox_common::ViewId;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a view. Pushed from wry callbacks and drained by the
/// main event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    PageLoad {
        view_id: ViewId,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        view_id: ViewId,
        title: String,
    },
    /// An IPC message was received from JavaScript.
    IpcMessage {
        view_id: ViewId,
        body: String,
    },
    /// A navigation passed the allowlist.
    NavigationRequested {
        view_id: ViewId,
        url: String,
    },
}

impl WebViewEvent {
    pub fn view_id(&self) -> ViewId {
        match self {
            Self::PageLoad { view_id, .. }
            | Self::TitleChanged { view_id, .. }
            | Self::IpcMessage { view_id, .. }
            | Self::NavigationRequested { view_id, .. } => *view_id,
        }
    }
}
