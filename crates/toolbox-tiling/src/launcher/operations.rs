//! Launcher commands: pane toggles, theme, context menu, pop-out windows.

use std::time::Instant;

use toolbox_common::{LauncherError, Point, Rect, Theme, ToolId, ViewId};
use tracing::{info, warn};

use crate::menu::{MenuMetrics, WindowFeatures};
use crate::ports::{ExternalWindow, PaneHost, Presenter, ThemeTarget, WindowOpener};
use crate::selection::Admission;

use super::Launcher;

impl<V: ThemeTarget, W: ExternalWindow> Launcher<V, W> {
    // -- Panes --

    /// A tool checkbox changed.
    pub fn toggle_tool<H, P>(
        &mut self,
        id: &ToolId,
        checked: bool,
        host: &mut H,
        presenter: &mut P,
    ) -> Result<(), LauncherError>
    where
        H: PaneHost<View = V>,
        P: Presenter,
    {
        if checked {
            self.admit(id, host, presenter).map(|_| ())
        } else {
            self.evict(id, presenter);
            Ok(())
        }
    }

    pub fn admit<H, P>(
        &mut self,
        id: &ToolId,
        host: &mut H,
        presenter: &mut P,
    ) -> Result<Admission, LauncherError>
    where
        H: PaneHost<View = V>,
        P: Presenter,
    {
        let Some(tool) = self.config.tool(id) else {
            presenter.set_checked(id, false);
            return Err(LauncherError::UnknownTool(id.clone()));
        };
        self.selection.admit(tool, host, presenter)
    }

    pub fn evict<P: Presenter>(&mut self, id: &ToolId, presenter: &mut P) -> bool {
        self.selection.evict(id, presenter)
    }

    /// Admit every tool marked `checked` in the catalog. Failures are logged
    /// and skipped.
    pub fn admit_startup<H, P>(&mut self, host: &mut H, presenter: &mut P)
    where
        H: PaneHost<View = V>,
        P: Presenter,
    {
        let startup: Vec<ToolId> = self
            .config
            .tools
            .iter()
            .filter(|t| t.checked)
            .map(|t| t.id.clone())
            .collect();

        for id in startup {
            if let Err(e) = self.admit(&id, host, presenter) {
                warn!(tool = %id, "startup admission skipped: {e}");
            }
        }
    }

    /// Viewport width changed.
    pub fn resize<P: Presenter>(&mut self, width: f64, presenter: &mut P) -> Vec<ToolId> {
        self.selection.resize(width, presenter)
    }

    /// A pane's view finished loading; push it the current theme.
    pub fn view_loaded(&mut self, view_id: ViewId) -> Option<ToolId> {
        self.selection.mark_loaded(view_id, self.theme.current())
    }

    /// Replay the full state into a freshly loaded presenter.
    pub fn present<P: Presenter>(&self, presenter: &mut P) {
        presenter.render_theme(self.theme.current());
        for tool in &self.config.tools {
            presenter.set_checked(&tool.id, self.selection.is_active(&tool.id));
        }
        presenter.render_panes(&self.selection.layout_signal());
        presenter.render_menu(None);
    }

    /// Rectangles for every active pane, in admission order.
    pub fn layout(&self, bounds: Rect) -> Vec<(ViewId, Rect)> {
        let signal = self.selection.layout_signal();
        let rects = self.layout.compute(signal.arrangement, bounds);
        self.selection
            .registry()
            .iter()
            .zip(rects)
            .map(|(pane, rect)| (pane.view_id, rect))
            .collect()
    }

    // -- Theme --

    pub fn set_theme<P: Presenter>(&mut self, theme: Theme, presenter: &mut P) {
        self.theme.set(theme);
        presenter.render_theme(theme);
        let report = self.broadcaster.broadcast(theme, self.selection.registry().iter());
        info!(
            %theme,
            panes = report.panes,
            windows = report.windows,
            dropped = report.dropped,
            "theme changed"
        );
    }

    pub fn toggle_theme<P: Presenter>(&mut self, presenter: &mut P) -> Theme {
        let next = self.theme.current().toggled();
        self.set_theme(next, presenter);
        next
    }

    // -- Context menu --

    /// Show the menu for a right-clicked tool entry. The menu is kept inside
    /// the sidebar column so panes never cover it.
    pub fn show_menu<P: Presenter>(
        &mut self,
        id: &ToolId,
        cursor: Point,
        metrics: &MenuMetrics,
        presenter: &mut P,
    ) -> Result<(), LauncherError> {
        let tool = self
            .config
            .tool(id)
            .ok_or_else(|| LauncherError::UnknownTool(id.clone()))?;
        let column = metrics.clipped_to_width(self.config.launcher.sidebar_width as f64);
        let placement = self.menu.show(tool, cursor, &column);
        presenter.render_menu(Some(&placement));
        Ok(())
    }

    pub fn dismiss_menu<P: Presenter>(&mut self, presenter: &mut P) {
        if self.menu.dismiss() {
            presenter.render_menu(None);
        }
    }

    /// The "open in new window" action. Returns the opened tool, or `None`
    /// if no menu was shown. `screen` is the monitor area in desktop
    /// coordinates.
    pub fn open_in_new_window<O, P>(
        &mut self,
        opener: &mut O,
        presenter: &mut P,
        screen: Rect,
        now: Instant,
    ) -> Result<Option<ToolId>, LauncherError>
    where
        O: WindowOpener<Window = W>,
        P: Presenter,
    {
        let Some(request) = self.menu.take_selection() else {
            return Ok(None);
        };
        presenter.render_menu(None);

        let tool = self
            .config
            .tool(&request.tool)
            .ok_or_else(|| LauncherError::UnknownTool(request.tool.clone()))?;
        let size = self.config.window_size_for(&tool.id);
        let features = WindowFeatures::centered(size, screen);

        let window = match opener.open_window(tool, &features) {
            Ok(window) => window,
            Err(e) => {
                warn!(tool = %tool.id, "{e}");
                presenter.alert(&e.to_string());
                return Err(e);
            }
        };

        info!(tool = %tool.id, features = %features.to_feature_string(), "opened tool window");
        self.broadcaster.track_window(window, now);
        Ok(Some(request.tool))
    }

    /// Fire due pop-out retries. Returns the next deadline, if any.
    pub fn poll_retries(&mut self, now: Instant) -> Option<Instant> {
        self.broadcaster.poll_retries(self.theme.current(), now);
        self.broadcaster.next_deadline()
    }
}
