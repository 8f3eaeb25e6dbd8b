//! Launcher configuration and persisted UI state.
//!
//! Provides TOML-based configuration with full validation and the
//! persisted theme preference. All config sections use sensible defaults
//! so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use toolbox_config::{config_to_json, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod theme_store;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{ToolboxConfig, CONFIG_SCHEMA_VERSION};
pub use theme_store::{FileThemeStorage, MemoryThemeStorage, ThemeStorage, ThemeStore};
pub use toml_writer::save_config_to_path;

use std::path::Path;

use toolbox_common::ConfigError;

/// Load config from `path`, or from the platform default path when `None`.
///
/// The default path gets a documented template written on first run. An
/// explicitly requested file must exist. Values that fail validation are
/// replaced section by section (see [`validation::repair`]).
pub fn load_config(path: Option<&Path>) -> Result<ToolboxConfig, ConfigError> {
    let config = match path {
        Some(p) => toml_loader::load_from_path(p)?,
        None => toml_loader::load_default()?,
    };

    Ok(validation::repair(config))
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ToolboxConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
