//! Full configuration validation.
//!
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`. Loading goes through
//! [`repair`] instead, which keeps every section that passes.

mod helpers;
mod launcher;
mod repair;
mod tools;


use crate::schema::ToolboxConfig;
use toolbox_common::ConfigError;

pub use repair::repair;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ToolboxConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    launcher::validate_launcher(&mut errors, config);
    launcher::validate_popup(&mut errors, config);
    tools::validate_tools(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
