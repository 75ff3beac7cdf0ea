//! Local filesystem preference storage.
//!
//! Preferences are a flat JSON object in `{root}/preferences.json`. Writes go
//! to a temporary file first and are renamed into place.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::storage::PreferenceStore;

const PREFERENCES_FILE: &str = "preferences.json";

/// Preference store backed by a JSON file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    root_dir: PathBuf,
}

impl FilePreferenceStore {
    /// Create a store rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Full path of the preferences file.
    pub fn path(&self) -> PathBuf {
        self.root_dir.join(PREFERENCES_FILE)
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match fs::read(self.path()) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// Write bytes atomically (write to temp, then rename).
    fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.flush()?;
        drop(file);

        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_all().unwrap_or_else(|e| {
            log::warn!(
                "Preferences at {} unreadable ({}), starting fresh",
                self.path().display(),
                e
            );
            BTreeMap::new()
        });
        values.insert(key.to_string(), value.to_string());
        let bytes = serde_json::to_vec_pretty(&values)?;
        Self::write_bytes(&self.path(), &bytes)
    }
}
