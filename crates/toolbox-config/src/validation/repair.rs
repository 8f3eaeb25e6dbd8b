//! Section-level repair of a loaded config.

use std::collections::HashSet;

use crate::schema::{default_tools, LauncherConfig, PopupConfig, ToolboxConfig};

use super::{launcher, tools};

/// Validate a freshly parsed config, replacing only what fails.
///
/// An invalid `[launcher]` or `[popup]` section falls back to its defaults.
/// Invalid or duplicate tools are dropped one by one; the built-in list is
/// used only when none survive. Every replacement is logged.
pub fn repair(mut config: ToolboxConfig) -> ToolboxConfig {
    let mut errors = Vec::new();
    launcher::validate_launcher(&mut errors, &config);
    if report(&errors, "launcher") {
        config.launcher = LauncherConfig::default();
    }

    errors.clear();
    launcher::validate_popup(&mut errors, &config);
    if report(&errors, "popup") {
        config.popup = PopupConfig::default();
    }

    let mut seen = HashSet::new();
    config.tools.retain(|tool| {
        let mut errors = Vec::new();
        tools::validate_tool(&mut errors, tool);
        if !seen.insert(tool.id.clone()) {
            errors.push(format!("tools: duplicate id '{}'", tool.id));
        }
        !report(&errors, "tool")
    });

    if config.tools.is_empty() {
        tracing::warn!("config lists no usable tools, using the built-in list");
        config.tools = default_tools();
    }

    config
}

/// Log each error; `true` when there was any.
fn report(errors: &[String], section: &str) -> bool {
    for e in errors {
        tracing::warn!(section, "config value replaced: {e}");
    }
    !errors.is_empty()
}
