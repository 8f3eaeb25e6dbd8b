//! Layout calculation: arrangement to slot rects.

use toolbox_common::Rect;

use super::{GridArrangement, GridLayout};

impl GridLayout {
    /// Rects for every slot of `arrangement`, in admission order.
    pub fn compute(&self, arrangement: GridArrangement, bounds: Rect) -> Vec<Rect> {
        let gap = self.gap as f64;
        match arrangement {
            GridArrangement::Empty => Vec::new(),
            GridArrangement::Single => vec![bounds],
            GridArrangement::SideBySide => {
                let (left, right) = split_columns(bounds, gap);
                vec![left, right]
            }
            GridArrangement::TwoOverOne => {
                let (top, bottom) = split_rows(bounds, gap);
                let (top_left, top_right) = split_columns(top, gap);
                vec![top_left, top_right, bottom]
            }
            GridArrangement::Quad => {
                let (top, bottom) = split_rows(bounds, gap);
                let (top_left, top_right) = split_columns(top, gap);
                let (bottom_left, bottom_right) = split_columns(bottom, gap);
                vec![top_left, top_right, bottom_left, bottom_right]
            }
        }
    }
}

fn split_columns(bounds: Rect, gap: f64) -> (Rect, Rect) {
    let available = (bounds.width - gap).max(0.0);
    let w1 = available / 2.0;
    let w2 = available - w1;
    (
        Rect {
            x: bounds.x,
            y: bounds.y,
            width: w1,
            height: bounds.height,
        },
        Rect {
            x: bounds.x + w1 + gap,
            y: bounds.y,
            width: w2,
            height: bounds.height,
        },
    )
}

fn split_rows(bounds: Rect, gap: f64) -> (Rect, Rect) {
    let available = (bounds.height - gap).max(0.0);
    let h1 = available / 2.0;
    let h2 = available - h1;
    (
        Rect {
            x: bounds.x,
            y: bounds.y,
            width: bounds.width,
            height: h1,
        },
        Rect {
            x: bounds.x,
            y: bounds.y + h1 + gap,
            width: bounds.width,
            height: h2,
        },
    )
}
