//! Menu clamping and pop-out window geometry.

use toolbox_common::{Point, Rect, Size};

use super::{MenuMetrics, WindowFeatures};

/// Shift the menu left/up by however much it would overflow the viewport.
///
/// A menu larger than the viewport is pinned to the top-left corner.
pub fn clamp_menu_position(cursor: Point, metrics: &MenuMetrics) -> Point {
    let overflow_x = (cursor.x + metrics.menu_width - metrics.viewport_width).max(0.0);
    let overflow_y = (cursor.y + metrics.menu_height - metrics.viewport_height).max(0.0);
    Point {
        x: (cursor.x - overflow_x).max(0.0),
        y: (cursor.y - overflow_y).max(0.0),
    }
}

impl WindowFeatures {
    /// Center a window of `size` on the monitor area `screen`, given in
    /// desktop coordinates. A window larger than the monitor is pinned to
    /// the monitor's top-left corner.
    pub fn centered(size: Size, screen: Rect) -> Self {
        let inset_x = ((screen.width - size.width as f64) / 2.0).max(0.0);
        let inset_y = ((screen.height - size.height as f64) / 2.0).max(0.0);
        Self {
            width: size.width,
            height: size.height,
            left: (screen.x + inset_x).floor() as i32,
            top: (screen.y + inset_y).floor() as i32,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The `window.open` feature string.
    pub fn to_feature_string(&self) -> String {
        format!(
            "toolbar=no,menubar=no,location=no,status=no,scrollbars=yes,resizable=yes,\
             width={},height={},left={},top={}",
            self.width, self.height, self.left, self.top
        )
    }
}
