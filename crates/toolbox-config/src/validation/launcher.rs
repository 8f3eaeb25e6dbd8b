//! Launcher and pop-out window validation.

use crate::schema::ToolboxConfig;

use super::helpers::validate_range;

/// Upper bound on concurrently embedded panes; the grid has four slots.
const MAX_GRID_SLOTS: u32 = 4;

pub(crate) fn validate_launcher(errors: &mut Vec<String>, config: &ToolboxConfig) {
    let l = &config.launcher;
    validate_range(errors, "launcher.max_panes", l.max_panes, 1, MAX_GRID_SLOTS);
    validate_range(
        errors,
        "launcher.narrow_breakpoint",
        l.narrow_breakpoint,
        320,
        2000,
    );
    validate_range(errors, "launcher.gap", l.gap, 0, 40);
    validate_range(errors, "launcher.sidebar_width", l.sidebar_width, 120, 600);
}

pub(crate) fn validate_popup(errors: &mut Vec<String>, config: &ToolboxConfig) {
    let p = &config.popup;
    validate_range(errors, "popup.default_width", p.default_width, 200, 8000);
    validate_range(errors, "popup.default_height", p.default_height, 200, 8000);

    if p.retry_delays_ms.is_empty() || p.retry_delays_ms.len() > 4 {
        errors.push(format!(
            "popup.retry_delays_ms must have 1 to 4 entries, got {}",
            p.retry_delays_ms.len()
        ));
    }
    for delay in &p.retry_delays_ms {
        if *delay > 10_000 {
            errors.push(format!(
                "popup.retry_delays_ms entry {delay} is out of range [0, 10000]"
            ));
        }
    }
}
