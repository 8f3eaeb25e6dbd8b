use std::sync::{Arc, Mutex};

use toolbox_common::ViewId;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// URL prefixes every view may navigate to.
///
/// - `toolbox://` serves the tool pages and the sidebar
/// - `about:blank` is the default empty page
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "toolbox://",
    // On Windows, WebView2 rewrites custom protocols: toolbox://localhost/… → http://toolbox.localhost/…
    "http://toolbox.localhost",
    "about:blank",
];

/// Check a URL against the built-in allowlist only.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// The built-in allowlist plus configured `https://` origins.
#[derive(Debug, Clone, Default)]
pub struct NavigationPolicy {
    origins: Vec<String>,
}

impl NavigationPolicy {
    /// Origins that are not `https://` are dropped with a warning.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let origins = origins
            .into_iter()
            .map(Into::into)
            .filter(|origin: &String| {
                let ok = origin.starts_with("https://") && origin.len() > "https://".len();
                if !ok {
                    warn!(%origin, "ignoring allowed origin: only https:// origins are accepted");
                }
                ok
            })
            .map(|origin| origin.trim_end_matches('/').to_string())
            .collect();
        Self { origins }
    }

    pub fn is_allowed(&self, url: &str) -> bool {
        is_navigation_allowed(url) || self.origins.iter().any(|origin| matches_origin(url, origin))
    }
}

/// `url` is `origin` itself or a path below it. A bare prefix match would let
/// `https://example.org.evil.test` through.
fn matches_origin(url: &str, origin: &str) -> bool {
    match url.strip_prefix(origin) {
        Some(rest) => rest.is_empty() || rest.starts_with(['/', '?', '#']),
        None => false,
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(%view_id, body_len = body.len(), "IPC message rejected: invalid JSON");
                return;
            }

            debug!(%view_id, body_len = body.len(), "IPC message from JS");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::IpcMessage { view_id, body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(%view_id, ?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad {
                    view_id,
                    state,
                    url,
                });
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        view_id: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(%view_id, title = %title, "title changed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::TitleChanged { view_id, title });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: Arc<Mutex<Vec<WebViewEvent>>>,
        policy: Arc<NavigationPolicy>,
        view_id: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !policy.is_allowed(&url) {
                warn!(%view_id, url = %url, "navigation blocked: URL not in allowlist");
                return false;
            }

            debug!(%view_id, url = %url, "navigation allowed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::NavigationRequested { view_id, url });
            }
            true
        })
    }

    /// Tools may not spawn windows of their own; pop-outs go through the
    /// launcher's context menu.
    pub(super) fn attach_new_window_handler<'a>(
        builder: WebViewBuilder<'a>,
        view_id: ViewId,
    ) -> WebViewBuilder<'a> {
        builder.with_new_window_req_handler(move |url| {
            warn!(%view_id, url = %url, "new window request blocked");
            false
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_toolbox_protocol() {
        assert!(is_navigation_allowed("toolbox://localhost/Timer_New/index.html"));
        assert!(is_navigation_allowed("toolbox://localhost/__launcher/index.html"));
    }

    #[test]
    fn allows_about_blank() {
        assert!(is_navigation_allowed("about:blank"));
    }

    #[test]
    fn allows_webview2_rewritten_custom_protocol() {
        assert!(is_navigation_allowed("http://toolbox.localhost/email/index.html"));
    }

    #[test]
    fn blocks_everything_else_by_default() {
        assert!(!is_navigation_allowed("https://example.com"));
        assert!(!is_navigation_allowed("http://localhost:8080"));
        assert!(!is_navigation_allowed("file:///etc/passwd"));
        assert!(!is_navigation_allowed("javascript:alert(1)"));
        assert!(!is_navigation_allowed("data:text/html,<h1>x</h1>"));
        assert!(!is_navigation_allowed(""));
        assert!(!is_navigation_allowed("not-a-url"));
    }

    #[test]
    fn configured_origins_are_allowed() {
        let policy = NavigationPolicy::new(["https://api.mail.tm/"]);
        assert!(policy.is_allowed("https://api.mail.tm"));
        assert!(policy.is_allowed("https://api.mail.tm/messages?page=1"));
        assert!(policy.is_allowed("toolbox://localhost/email/index.html"));
        assert!(!policy.is_allowed("https://api.mail.tm.evil.test/"));
        assert!(!policy.is_allowed("http://api.mail.tm/"));
    }

    #[test]
    fn non_https_origins_are_dropped() {
        let policy = NavigationPolicy::new(["http://insecure.test", "https://", "ftp://files.test"]);
        assert!(!policy.is_allowed("http://insecure.test/"));
        assert!(!policy.is_allowed("ftp://files.test/"));
        assert!(!policy.is_allowed("https://anything.test"));
    }
}
