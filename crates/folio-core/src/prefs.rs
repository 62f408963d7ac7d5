//! Client-local preference storage.
//!
//! A flat string key-value map persisted as JSON. The only key the site uses
//! is [`THEME_KEY`]; the store is read once at startup and written on change.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::PrefsError;
use crate::types::Theme;

/// Storage key of the theme preference
pub const THEME_KEY: &str = "portfolio-theme";

/// File name of the store inside the data directory
pub const PREFS_FILE: &str = "preferences.json";

/// JSON-backed key-value store
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl PreferenceStore {
    /// Open the store at `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PrefsError> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, values })
    }

    /// Open `preferences.json` inside `data_dir`
    pub fn in_dir(data_dir: &Path) -> Result<Self, PrefsError> {
        Self::open(data_dir.join(PREFS_FILE))
    }

    /// Open the store in `data_dir`, falling back to an empty one if the
    /// file is unreadable.
    ///
    /// A corrupt file is overwritten on the next `set`.
    pub fn in_dir_or_empty(data_dir: &Path) -> Self {
        Self::in_dir(data_dir).unwrap_or_else(|e| {
            let path = data_dir.join(PREFS_FILE);
            tracing::warn!(path = %path.display(), error = %e, "preferences unreadable, starting empty");
            Self {
                path,
                values: BTreeMap::new(),
            }
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Set `key` and persist the whole store
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }

    fn save(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Saved theme, dark when unset or unrecognized
    pub fn theme(&self) -> Theme {
        self.get(THEME_KEY)
            .and_then(|raw| raw.parse().ok())
            .unwrap_or_default()
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), PrefsError> {
        self.set(THEME_KEY, theme.as_str())
    }
}
