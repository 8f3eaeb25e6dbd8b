//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;
use toolbox_common::{ConfigError, ToolId};

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_toolbox_config.toml"));
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[launcher]
gap = 10

[theme]
default = "dark"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.launcher.gap, 10);
    assert_eq!(config.theme.default, toolbox_common::Theme::Dark);
    // Defaults preserved
    assert_eq!(config.launcher.max_panes, 4);
    assert!(config.tool(&ToolId::new("email")).is_some());
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[launcher]
max_panes = 9
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.launcher.max_panes, 9);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("toolbox").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.launcher.narrow_breakpoint, 768);
    assert_eq!(config.tools.len(), 5);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ToolboxConfig;

    let content = default_config_toml();
    let config: ToolboxConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.theme.storage_key, "toolsSiteTheme");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_paths_are_reasonable() {
    // Not every CI environment has a home directory.
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("toolbox"));
        assert!(path_str.ends_with("config.toml"));
    }
    if let Ok(path) = default_state_path() {
        assert!(path.to_string_lossy().ends_with("state.json"));
    }
}
