//! Coordinate conversion and main-window geometry.

use toolbox_common::Rect;
use winit::dpi::{LogicalPosition, LogicalSize, PhysicalPosition, PhysicalSize};

// =============================================================================
// COORDINATE CONVERSION
// =============================================================================

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

/// A monitor's physical origin and size as a logical desktop rect.
pub fn monitor_area(position: PhysicalPosition<i32>, size: PhysicalSize<u32>, scale: f64) -> Rect {
    let origin: LogicalPosition<f64> = position.to_logical(scale);
    let size: LogicalSize<f64> = size.to_logical(scale);
    Rect {
        x: origin.x,
        y: origin.y,
        width: size.width,
        height: size.height,
    }
}

// =============================================================================
// PANE AREA
// =============================================================================

/// The region right of the sidebar that holds the pane grid.
pub fn pane_area(width: f64, height: f64, sidebar_width: u32, gap: u32) -> Rect {
    let gap = gap as f64;
    let x = sidebar_width as f64 + gap;
    Rect {
        x,
        y: gap,
        width: (width - x - gap).max(0.0),
        height: (height - 2.0 * gap).max(0.0),
    }
}

// =============================================================================
// TESTS
// =============================================================================
