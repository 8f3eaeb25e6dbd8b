//! Main window, content provider, and sidebar setup.

use toolbox_webview::{ContentProvider, NavigationPolicy, WebViewConfig, WebViewManager};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use super::core::{Shell, ToolboxApp};
use super::types::{SIDEBAR_PATH, SIDEBAR_VIEW};
use super::webview_bridge::{rect_to_wry, SidebarPresenter, WryPaneHost, SIDEBAR_HTML};

impl ToolboxApp {
    /// Create the main window and the sidebar view.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title("Toolbox")
            .with_inner_size(winit::dpi::LogicalSize::new(1280.0, 800.0))
            .with_min_inner_size(winit::dpi::LogicalSize::new(360.0, 480.0));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => w,
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let manager = self.initialize_webviews();

        let full = window.inner_size().to_logical::<f64>(window.scale_factor());
        let bounds = rect_to_wry(&toolbox_common::Rect {
            x: 0.0,
            y: 0.0,
            width: full.width,
            height: full.height,
        });
        let sidebar = match manager.create(
            SIDEBAR_VIEW,
            &window,
            bounds,
            WebViewConfig::for_sidebar(SIDEBAR_PATH),
        ) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("Failed to create launcher sidebar: {e}");
                return false;
            }
        };

        self.shell = Some(Shell {
            sidebar,
            manager,
            window,
        });
        tracing::info!("Window and sidebar created");
        true
    }

    /// Serve the tool directory and the sidebar over `toolbox://`.
    fn initialize_webviews(&self) -> WebViewManager {
        if !self.tools_dir.is_dir() {
            tracing::warn!(
                path = %self.tools_dir.display(),
                "Tools directory not found, panes will show a 404"
            );
        }

        let mut provider = ContentProvider::new(&self.tools_dir);
        provider.add_override(SIDEBAR_PATH, "text/html", SIDEBAR_HTML.as_bytes().to_vec());

        let policy = NavigationPolicy::new(self.config.content.allowed_origins.iter().cloned());
        let mut manager = WebViewManager::new().with_navigation(policy);
        manager.set_content_provider(provider);

        tracing::info!(tools_dir = %self.tools_dir.display(), "WebView manager initialized");
        manager
    }

    /// Classify the initial viewport and admit the tools marked `checked`.
    pub(super) fn start_panes(&mut self) {
        let Some(shell) = &self.shell else {
            return;
        };
        let (width, _) = shell.logical_size();
        let mut presenter = SidebarPresenter::new(&shell.sidebar);
        let mut host = WryPaneHost::new(&shell.window, &shell.manager);

        self.launcher.resize(width, &mut presenter);
        self.launcher.admit_startup(&mut host, &mut presenter);
        self.sync_bounds();
    }
}
