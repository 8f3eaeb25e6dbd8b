//! Persisted theme preference.
//!
//! The preference is a single key in a small JSON state file. It is read
//! once at startup and written on every change; other keys in the file are
//! preserved.

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde_json::{Map, Value};
use toolbox_common::{ConfigError, Theme};
use tracing::{debug, warn};

use crate::toml_writer::atomic_write;

/// Backend holding the persisted theme value.
pub trait ThemeStorage {
    /// Read the stored theme. `Ok(None)` means nothing has been saved yet.
    fn load(&self) -> Result<Option<Theme>, ConfigError>;

    fn store(&mut self, theme: Theme) -> Result<(), ConfigError>;
}

// =============================================================================
// FILE STORAGE
// =============================================================================

/// Stores the theme under `key` in a JSON object file.
pub struct FileThemeStorage {
    path: PathBuf,
    key: String,
}

impl FileThemeStorage {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_state(&self) -> Result<Map<String, Value>, ConfigError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(ConfigError::StorageError(format!(
                    "failed to read {}: {e}",
                    self.path.display()
                )))
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) | Err(_) => {
                warn!(path = %self.path.display(), "state file is not a JSON object, ignoring");
                Ok(Map::new())
            }
        }
    }
}

impl ThemeStorage for FileThemeStorage {
    fn load(&self) -> Result<Option<Theme>, ConfigError> {
        let state = self.read_state()?;
        let Some(value) = state.get(&self.key) else {
            return Ok(None);
        };

        match value.as_str().map(str::parse::<Theme>) {
            Some(Ok(theme)) => Ok(Some(theme)),
            _ => {
                warn!(key = %self.key, %value, "ignoring unrecognized stored theme");
                Ok(None)
            }
        }
    }

    fn store(&mut self, theme: Theme) -> Result<(), ConfigError> {
        let mut state = self.read_state()?;
        state.insert(self.key.clone(), Value::String(theme.as_str().to_string()));

        let json = serde_json::to_string_pretty(&Value::Object(state))
            .map_err(|e| ConfigError::StorageError(format!("failed to serialize state: {e}")))?;
        atomic_write(&self.path, &json).map_err(ConfigError::StorageError)?;

        debug!(path = %self.path.display(), %theme, "theme persisted");
        Ok(())
    }
}

// =============================================================================
// IN-MEMORY STORAGE
// =============================================================================

/// Non-persistent storage. Clones share the same slot, so a test can keep a
/// clone to observe what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStorage {
    slot: Rc<Cell<Option<Theme>>>,
}

impl MemoryThemeStorage {
    pub fn new(initial: Option<Theme>) -> Self {
        Self {
            slot: Rc::new(Cell::new(initial)),
        }
    }

    pub fn stored(&self) -> Option<Theme> {
        self.slot.get()
    }
}

impl ThemeStorage for MemoryThemeStorage {
    fn load(&self) -> Result<Option<Theme>, ConfigError> {
        Ok(self.slot.get())
    }

    fn store(&mut self, theme: Theme) -> Result<(), ConfigError> {
        self.slot.set(Some(theme));
        Ok(())
    }
}

// =============================================================================
// THEME STORE
// =============================================================================

/// The process-wide theme value and its persistence.
pub struct ThemeStore {
    current: Theme,
    storage: Box<dyn ThemeStorage>,
}

impl ThemeStore {
    /// Read the persisted preference once, falling back to `default`.
    pub fn open(storage: Box<dyn ThemeStorage>, default: Theme) -> Self {
        let current = match storage.load() {
            Ok(Some(theme)) => theme,
            Ok(None) => default,
            Err(e) => {
                warn!("failed to load theme preference, using {default}: {e}");
                default
            }
        };
        debug!(theme = %current, "theme store opened");
        Self { current, storage }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Persist and adopt `theme`. A persistence failure is logged; the
    /// in-memory value is updated regardless.
    pub fn set(&mut self, theme: Theme) {
        if let Err(e) = self.storage.store(theme) {
            warn!(%theme, "failed to persist theme preference: {e}");
        }
        self.current = theme;
    }
}
