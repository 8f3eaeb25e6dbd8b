use crate::content::content_url;

/// Configuration for creating a new view.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load. A blank page when `None`.
    pub url: Option<String>,
    pub transparent: bool,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    pub user_agent: Option<String>,
    pub clipboard: bool,
    /// Install the `window.toolbox.ipc` bridge.
    pub ipc_bridge: bool,
    /// Install the `setTheme` message listener.
    pub theme_listener: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Toolbox/{}", env!("CARGO_PKG_VERSION"))),
            clipboard: true,
            ipc_bridge: false,
            theme_listener: false,
        }
    }
}

impl WebViewConfig {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// A tool page served from the content root, listening for theme messages.
    pub fn for_tool(path: &str) -> Self {
        Self {
            theme_listener: true,
            ..Self::with_url(content_url(path))
        }
    }

    /// The launcher sidebar: IPC bridge on, no theme listener.
    pub fn for_sidebar(path: &str) -> Self {
        Self {
            ipc_bridge: true,
            ..Self::with_url(content_url(path))
        }
    }
}
