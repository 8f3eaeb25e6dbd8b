use std::path::PathBuf;

use crate::types::ToolId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("state storage error: {0}")]
    StorageError(String),
}

/// Failures of the windowing layer outside the launcher's own commands.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("window error: {0}")]
    WindowError(String),
}

/// Failures of launcher commands. These are reported to the user (alert or
/// reverted checkbox) and never leave the registry partially mutated.
#[derive(Debug, thiserror::Error)]
pub enum LauncherError {
    #[error("maximum {limit} applications allowed in split screen")]
    CapacityExceeded { limit: usize },

    #[error("unknown tool: {0}")]
    UnknownTool(ToolId),

    #[error("failed to create view for {tool}: {reason}")]
    ViewCreation { tool: ToolId, reason: String },

    #[error("failed to open window for {tool}: {reason}")]
    WindowOpen { tool: ToolId, reason: String },
}

/// A best-effort message push that did not land. Callers log and drop these.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("target is closed")]
    TargetClosed,

    #[error("script evaluation failed: {0}")]
    Script(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ToolboxError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Launcher(#[from] LauncherError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("duplicate tool id 'timer'".into());
        assert_eq!(
            err.to_string(),
            "config validation error: duplicate tool id 'timer'"
        );

        let err = ConfigError::StorageError("read-only filesystem".into());
        assert_eq!(err.to_string(), "state storage error: read-only filesystem");
    }

    #[test]
    fn launcher_error_display() {
        let err = LauncherError::CapacityExceeded { limit: 4 };
        assert_eq!(
            err.to_string(),
            "maximum 4 applications allowed in split screen"
        );

        let err = LauncherError::UnknownTool(ToolId::new("nope"));
        assert_eq!(err.to_string(), "unknown tool: nope");

        let err = LauncherError::ViewCreation {
            tool: ToolId::new("email"),
            reason: "no window".into(),
        };
        assert_eq!(err.to_string(), "failed to create view for email: no window");
    }

    #[test]
    fn delivery_error_display() {
        assert_eq!(DeliveryError::TargetClosed.to_string(), "target is closed");
        assert_eq!(
            DeliveryError::Script("eval failed".into()).to_string(),
            "script evaluation failed: eval failed"
        );
    }

    #[test]
    fn toolbox_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: ToolboxError = config_err.into();
        assert!(matches!(err, ToolboxError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn toolbox_error_from_launcher() {
        let err: ToolboxError = LauncherError::CapacityExceeded { limit: 4 }.into();
        assert!(matches!(err, ToolboxError::Launcher(_)));
        assert!(err.to_string().contains("maximum 4"));
    }

    #[test]
    fn toolbox_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ToolboxError = io_err.into();
        assert!(matches!(err, ToolboxError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn toolbox_error_from_platform() {
        let err: ToolboxError = PlatformError::WindowError("no display".into()).into();
        assert!(matches!(err, ToolboxError::Platform(_)));
        assert_eq!(err.to_string(), "window error: no display");
    }
}
