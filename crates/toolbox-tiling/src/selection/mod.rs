//! Pane admission under capacity and viewport constraints.

mod operations;
mod types;

pub use types::{Admission, SelectionController};
