//! Storage abstractions for viewer preferences.
//!
//! The site keeps a single per-viewer preference (the theme). It lives in a
//! small key-value store with the same contract as browser local storage:
//! string keys, string values, read at startup, written on change.
//!
//! ## Directory Structure
//!
//! ```text
//! storage/
//! ├── config.toml           # Site configuration
//! └── preferences.json      # Key-value preferences
//! ```

pub mod local;

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;

pub use local::FilePreferenceStore;

/// Key-value preference storage.
pub trait PreferenceStore: Send + Sync {
    /// Read a value, `None` when unset.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Preferences held in memory only.
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().unwrap_or_else(|e| e.into_inner());
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryPreferenceStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_with_value() {
        let store = MemoryPreferenceStore::with_value("theme", "dark");
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }
}
