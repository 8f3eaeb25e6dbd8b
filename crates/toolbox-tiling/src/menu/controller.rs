//! Hidden/shown transitions for the tool context menu.

use toolbox_common::{Point, ToolDescriptor};
use tracing::debug;

use super::placement::clamp_menu_position;
use super::{ContextMenuRequest, MenuMetrics, MenuPlacement, MenuState};

#[derive(Debug, Default)]
pub struct ContextMenuController {
    state: MenuState,
}

impl ContextMenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &MenuState {
        &self.state
    }

    pub fn is_shown(&self) -> bool {
        matches!(self.state, MenuState::Shown(_))
    }

    /// Show the menu for `tool` at `cursor`, replacing any menu already shown.
    pub fn show(&mut self, tool: &ToolDescriptor, cursor: Point, metrics: &MenuMetrics) -> MenuPlacement {
        let placement = MenuPlacement {
            request: ContextMenuRequest {
                tool: tool.id.clone(),
                path: tool.path.clone(),
                cursor,
            },
            position: clamp_menu_position(cursor, metrics),
        };
        debug!(tool = %tool.id, x = placement.position.x, y = placement.position.y, "context menu shown");
        self.state = MenuState::Shown(placement.clone());
        placement
    }

    /// Hide the menu. Returns `true` if it was shown.
    pub fn dismiss(&mut self) -> bool {
        let was_shown = self.is_shown();
        self.state = MenuState::Hidden;
        was_shown
    }

    /// Hide the menu and hand back the request an action applies to.
    pub fn take_selection(&mut self) -> Option<ContextMenuRequest> {
        match std::mem::take(&mut self.state) {
            MenuState::Shown(placement) => Some(placement.request),
            MenuState::Hidden => None,
        }
    }
}
