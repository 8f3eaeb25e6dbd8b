use std::borrow::Cow;
use std::sync::Arc;

use toolbox_common::ViewId;
use tracing::{debug, warn};
use wry::http::Response;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{request_path, ContentProvider, ORIGIN, SCHEME};
use crate::ipc::{theme_listener_script, IPC_INIT_SCRIPT};

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create a view as a child of `window`, positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        view_id: ViewId,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let (builder, initial_url) = self.builder(view_id, &config);
        let webview = builder.with_bounds(bounds).build_as_child(window)?;

        debug!(%view_id, url = %initial_url, "child view created");
        Ok(WebViewHandle::new(webview, view_id, initial_url))
    }

    /// Set the content provider backing the `toolbox://` protocol.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn builder<'a>(&self, view_id: ViewId, config: &WebViewConfig) -> (WebViewBuilder<'a>, String) {
        let events = &self.events;

        let mut builder = WebViewBuilder::new()
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_focused(false);

        if config.ipc_bridge {
            builder = builder.with_initialization_script(IPC_INIT_SCRIPT);
        }
        if config.theme_listener {
            builder = builder.with_initialization_script(&theme_listener_script());
        }

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(events), view_id);
        builder = Self::attach_page_load_handler(builder, Arc::clone(events), view_id);
        builder = Self::attach_title_handler(builder, Arc::clone(events), view_id);
        builder = Self::attach_navigation_handler(
            builder,
            Arc::clone(events),
            Arc::clone(&self.navigation),
            view_id,
        );
        builder = Self::attach_new_window_handler(builder, view_id);
        builder = self.attach_custom_protocol(builder);

        let initial_url = if let Some(url) = &config.url {
            builder = builder.with_url(url);
            url.clone()
        } else {
            builder = builder.with_html("<html><body></body></html>");
            "about:blank".to_string()
        };

        (builder, initial_url)
    }

    fn attach_custom_protocol<'a>(&self, mut builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        if let Some(provider) = &self.content_provider {
            let cp = Arc::clone(provider);
            builder = builder.with_custom_protocol(SCHEME.to_string(), move |_wv_id, request| {
                let uri = request.uri().to_string();
                let path = request_path(&uri);

                match cp.resolve(path) {
                    Some((mime, data)) => respond(200, mime.as_ref(), data.into_owned()),
                    None => {
                        warn!(path = %path, "custom protocol: asset not found");
                        respond(404, "text/plain", b"Not Found".to_vec())
                    }
                }
            });
        }
        builder
    }
}

fn respond(status: u16, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header("Content-Type", mime)
        .header("Access-Control-Allow-Origin", ORIGIN)
        .body(Cow::from(body))
        .unwrap_or_else(|e| {
            warn!("custom protocol: failed to build response: {e}");
            Response::new(Cow::from(Vec::new()))
        })
}
