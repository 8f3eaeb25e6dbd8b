//! Write config and state files to disk.
//!
//! Supports atomic writes (write to `.tmp`, then rename) to prevent
//! corruption if the process crashes mid-write.

use std::path::Path;

use toolbox_common::ConfigError;

use crate::schema::ToolboxConfig;
use crate::validation;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Write config to a specific path. An invalid config is refused.
pub fn save_config_to_path(config: &ToolboxConfig, path: &Path) -> Result<(), ConfigError> {
    validation::validate(config)?;

    let toml_str = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))?;

    atomic_write(path, &toml_str).map_err(ConfigError::ParseError)?;

    tracing::debug!(path = %path.display(), "Config saved to disk");
    Ok(())
}

/// Write `contents` to `path` via a sibling `.tmp` file and a rename.
///
/// Creates parent directories if they don't exist. Errors are returned as
/// messages so callers can wrap them in the matching `ConfigError` variant.
pub(crate) fn atomic_write(path: &Path, contents: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("failed to create directory {}: {e}", parent.display()))?;
    }

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = std::path::PathBuf::from(tmp_name);

    std::fs::write(&tmp_path, contents)
        .map_err(|e| format!("failed to write {}: {e}", tmp_path.display()))?;

    if let Err(e) = std::fs::rename(&tmp_path, path) {
        // Rename failed -- try direct write as fallback (Windows compat)
        tracing::warn!("atomic rename failed ({}), falling back to direct write", e);
        std::fs::write(path, contents)
            .map_err(|e2| format!("failed to write {}: {e2}", path.display()))?;
        let _ = std::fs::remove_file(&tmp_path);
    }

    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
