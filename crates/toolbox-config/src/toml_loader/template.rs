//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Toolbox Launcher Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[launcher]
# max_panes = 4            # 1-4, panes shown side by side on wide windows
# narrow_breakpoint = 768  # 320-2000, at or below this width only one pane is shown
# gap = 6                  # 0-40
# sidebar_width = 240      # 120-600

[popup]
# default_width = 800      # used when a tool has no window preset
# default_height = 600
# retry_delays_ms = [300, 1000]  # theme is re-sent to new windows after these delays

[content]
# base_dir = "tools"       # directory holding the tool pages
# allowed_origins = []     # extra https:// origins tools may navigate to

[theme]
# default = "light"        # light, dark (used until a preference is saved)
# storage_key = "toolsSiteTheme"

# Defining any [[tools]] entry replaces the built-in list.
#
# [[tools]]
# id = "email"
# title = "Temp Mail"
# path = "email/index.html"
# window = { width = 900, height = 720 }
# checked = false          # open at startup
"##
    .to_string()
}
