//! Theme preference configuration.

use serde::{Deserialize, Serialize};
use toolbox_common::Theme;

/// Theme selection and persistence configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Theme used when no preference has been persisted yet.
    pub default: Theme,
    /// Key under which the preference is stored in the state file.
    pub storage_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            default: Theme::Light,
            storage_key: "toolsSiteTheme".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_config_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.default, Theme::Light);
        assert_eq!(config.storage_key, "toolsSiteTheme");
    }

    #[test]
    fn theme_config_from_toml() {
        let config: ThemeConfig = toml::from_str(r#"default = "dark""#).unwrap();
        assert_eq!(config.default, Theme::Dark);
        assert_eq!(config.storage_key, "toolsSiteTheme");
    }
}
