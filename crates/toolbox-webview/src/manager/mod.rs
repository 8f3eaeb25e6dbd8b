//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances: one per active tool
//! pane, one per pop-out window, and one for the launcher sidebar.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use handlers::NavigationPolicy;
pub use types::WebViewConfig;

/// Creates views and collects their events.
pub struct WebViewManager {
    /// Event sink. wry callbacks push here; the main event loop drains it.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    /// Serves the `toolbox://` custom protocol.
    content_provider: Option<Arc<ContentProvider>>,
    navigation: Arc<NavigationPolicy>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
            navigation: Arc::new(NavigationPolicy::default()),
        }
    }

    pub fn with_navigation(mut self, policy: NavigationPolicy) -> Self {
        self.navigation = Arc::new(policy);
        self
    }

    pub fn navigation(&self) -> &NavigationPolicy {
        &self.navigation
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        let mut events = match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *events)
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
