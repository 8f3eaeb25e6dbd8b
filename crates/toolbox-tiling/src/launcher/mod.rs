//! Launcher state and commands.

mod operations;
mod types;

pub use types::Launcher;
