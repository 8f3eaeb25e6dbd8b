use toolbox_common::{DeliveryError, FrameMessage, ViewId};
use toolbox_tiling::ThemeTarget;
use wry::WebView;

use crate::ipc::{js_dispatch_message, js_post_frame_message};

/// Handle to a live view. Dropping it destroys the underlying webview.
pub struct WebViewHandle {
    webview: WebView,
    view_id: ViewId,
    /// URL the view was created with.
    url: String,
}

impl WebViewHandle {
    pub(super) fn new(webview: WebView, view_id: ViewId, url: String) -> Self {
        Self {
            webview,
            view_id,
            url,
        }
    }

    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Dispatch to a handler registered with `window.toolbox.ipc.on`.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&js_dispatch_message(kind, payload))
    }

    /// Post a cross-document message into the page.
    pub fn post_frame_message(&self, message: &FrameMessage) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&js_post_frame_message(message))
    }

    /// Set the view bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}

impl ThemeTarget for WebViewHandle {
    fn post_message(&self, message: &FrameMessage) -> Result<(), DeliveryError> {
        self.post_frame_message(message)
            .map_err(|e| DeliveryError::Script(e.to_string()))
    }
}
