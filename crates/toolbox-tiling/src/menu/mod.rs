//! Right-click context menu: "open in new window".

mod controller;
mod placement;
mod types;

pub use controller::ContextMenuController;
pub use placement::clamp_menu_position;
pub use types::*;
