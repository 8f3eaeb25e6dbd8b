use std::path::PathBuf;

use clap::Parser;
use toolbox_common::Theme;

/// Toolbox: a multi-pane launcher for small browser-based utilities.
#[derive(Parser, Debug)]
#[command(name = "toolbox", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory holding the tool pages (overrides `content.base_dir`).
    #[arg(long)]
    pub tools_dir: Option<PathBuf>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Switch to this theme at startup. Remembered like a toggle.
    #[arg(long)]
    pub theme: Option<Theme>,

    /// Write the effective config to the config path and exit.
    #[arg(long)]
    pub write_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "toolbox",
            "--config",
            "/tmp/toolbox.toml",
            "--tools-dir",
            "site",
            "--log-level",
            "debug",
            "--theme",
            "dark",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/toolbox.toml")));
        assert_eq!(args.tools_dir, Some(PathBuf::from("site")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.theme, Some(Theme::Dark));
        assert!(!args.write_config);
    }

    #[test]
    fn rejects_unknown_theme() {
        assert!(Args::try_parse_from(["toolbox", "--theme", "sepia"]).is_err());
    }

    #[test]
    fn write_config_flag() {
        let args = Args::try_parse_from(["toolbox", "--write-config"]).unwrap();
        assert!(args.write_config);
        assert!(args.config.is_none());
    }
}
