//! Pane admission, theme fan-out, and context menu state for the launcher.
//!
//! Nothing here touches a window. The desktop shell implements the traits in
//! [`ports`] and drives a [`Launcher`] from its event loop.

pub mod broadcast;
pub mod launcher;
pub mod layout;
pub mod menu;
pub mod pane;
pub mod ports;
pub mod registry;
pub mod selection;
pub mod viewport;

#[cfg(test)]
mod testing;

pub use broadcast::{BroadcastReport, ThemeBroadcaster};
pub use launcher::Launcher;
pub use layout::{GridArrangement, GridLayout, LayoutSignal};
pub use menu::{ContextMenuController, ContextMenuRequest, MenuMetrics, MenuPlacement, WindowFeatures};
pub use pane::Pane;
pub use ports::{ExternalWindow, PaneHost, Presenter, ThemeTarget, WindowOpener};
pub use registry::PaneRegistry;
pub use selection::{Admission, SelectionController};
pub use viewport::ViewportMode;
