//! Tool descriptor validation: id format, uniqueness, resource paths.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use toolbox_common::ToolDescriptor;

use crate::schema::ToolboxConfig;

use super::helpers::validate_range;

fn tool_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("tool id pattern is valid"))
}

/// Whether `id` is usable as a tool identifier (also used as a DOM id suffix).
pub fn is_valid_tool_id(id: &str) -> bool {
    tool_id_pattern().is_match(id)
}

pub(crate) fn validate_tools(errors: &mut Vec<String>, config: &ToolboxConfig) {
    if config.tools.is_empty() {
        errors.push("tools must contain at least one entry".into());
        return;
    }

    let mut seen = HashSet::new();
    for tool in &config.tools {
        if !seen.insert(tool.id.as_str()) {
            errors.push(format!("tools: duplicate id '{}'", tool.id));
        }
        validate_tool(errors, tool);
    }
}

/// Checks that apply to a single descriptor, independent of its siblings.
pub(crate) fn validate_tool(errors: &mut Vec<String>, tool: &ToolDescriptor) {
    let id = tool.id.as_str();
    if !is_valid_tool_id(id) {
        errors.push(format!("tools: invalid id '{id}'"));
    }
    if tool.path.trim().is_empty() {
        errors.push(format!("tools.{id}.path must not be empty"));
    } else if tool.path.starts_with('/') || tool.path.split('/').any(|seg| seg == "..") {
        errors.push(format!(
            "tools.{id}.path '{}' must be relative to the content root",
            tool.path
        ));
    }
    if let Some(size) = tool.window {
        validate_range(errors, &format!("tools.{id}.window.width"), size.width, 200, 8000);
        validate_range(
            errors,
            &format!("tools.{id}.window.height"),
            size.height,
            200,
            8000,
        );
    }
}
