//! Admit, evict, resize, and load-complete handling.

use toolbox_common::{FrameMessage, LauncherError, Theme, ToolDescriptor, ToolId, ViewId};
use tracing::{debug, info, warn};

use crate::pane::Pane;
use crate::ports::{PaneHost, Presenter, ThemeTarget};
use crate::viewport::ViewportMode;

use super::{Admission, SelectionController};

impl<V: ThemeTarget> SelectionController<V> {
    /// Make `tool` an active pane.
    ///
    /// On failure the tool's checkbox is reverted and the registry is left
    /// exactly as it was.
    pub fn admit<H, P>(
        &mut self,
        tool: &ToolDescriptor,
        host: &mut H,
        presenter: &mut P,
    ) -> Result<Admission, LauncherError>
    where
        H: PaneHost<View = V>,
        P: Presenter,
    {
        if self.registry.contains(&tool.id) {
            presenter.set_checked(&tool.id, true);
            return Ok(Admission::AlreadyActive);
        }

        if !self.mode.is_narrow() && self.registry.len() >= self.capacity {
            let err = LauncherError::CapacityExceeded {
                limit: self.capacity,
            };
            warn!(tool = %tool.id, "{err}");
            presenter.set_checked(&tool.id, false);
            presenter.alert(&err.to_string());
            return Err(err);
        }

        let view_id = self.registry.allocate_view_id();
        let view = match host.create_view(view_id, tool) {
            Ok(view) => view,
            Err(e) => {
                warn!(tool = %tool.id, "{e}");
                presenter.set_checked(&tool.id, false);
                return Err(e);
            }
        };

        let evicted = if self.mode.is_narrow() {
            let others = self.registry.ids();
            for id in &others {
                self.registry.remove(id);
                presenter.set_checked(id, false);
            }
            others
        } else {
            Vec::new()
        };

        self.registry.insert(Pane::new(tool.clone(), view_id, view));
        info!(tool = %tool.id, %view_id, panes = self.registry.len(), "pane admitted");

        presenter.render_panes(&self.layout_signal());
        presenter.set_checked(&tool.id, true);
        Ok(Admission::Admitted { view_id, evicted })
    }

    /// Remove the pane for `id`. Returns `false` if it was not active.
    pub fn evict<P: Presenter>(&mut self, id: &ToolId, presenter: &mut P) -> bool {
        let Some(pane) = self.registry.remove(id) else {
            presenter.set_checked(id, false);
            return false;
        };
        info!(tool = %id, view_id = %pane.view_id, panes = self.registry.len(), "pane evicted");
        drop(pane);

        presenter.set_checked(id, false);
        presenter.render_panes(&self.layout_signal());
        true
    }

    /// React to a new viewport width. Entering narrow mode keeps only the
    /// most recently admitted pane; the others are returned.
    pub fn resize<P: Presenter>(&mut self, width: f64, presenter: &mut P) -> Vec<ToolId> {
        let mode = ViewportMode::classify(width, self.narrow_breakpoint);
        if mode != self.mode {
            debug!(?mode, width, "viewport mode changed");
            self.mode = mode;
        }

        if !mode.is_narrow() || self.registry.len() <= 1 {
            return Vec::new();
        }

        let mut evicted = self.registry.ids();
        evicted.pop();
        for id in &evicted {
            self.registry.remove(id);
            presenter.set_checked(id, false);
        }
        info!(evicted = evicted.len(), "narrow viewport, kept most recent pane");
        presenter.render_panes(&self.layout_signal());
        evicted
    }

    /// Record that `view_id` finished loading and push `theme` into it.
    ///
    /// Views that were evicted before loading are ignored.
    pub fn mark_loaded(&mut self, view_id: ViewId, theme: Theme) -> Option<ToolId> {
        let pane = self.registry.by_view_mut(view_id)?;
        pane.loaded = true;
        if let Err(e) = pane.view.post_message(&FrameMessage::set_theme(theme)) {
            debug!(tool = %pane.id(), "theme push after load dropped: {e}");
        }
        Some(pane.id().clone())
    }
}
