//! Persisted semester override
//!
//! # SemesterPreferenceStore
//!
//! Remembers which term the user picked, falling back to the calendar when
//! nothing usable is stored.
//!
//! ## Storage Location
//!
//! [`FileStorage::new`] keeps one file per key in the platform data directory:
//!
//! - **macOS**: `~/Library/Application Support/bakeoff/`
//! - **Linux**: `~/.local/share/bakeoff/`
//! - **Windows**: `%LOCALAPPDATA%\bakeoff\`
//!
//! The file body is the bare value, no encoding.

use crate::calendar::current_term_code_now;
use crate::error::{CoreError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Key the selected term is stored under
pub const STORAGE_KEY: &str = "wdd430_semester";

/// Client-side key-value storage
pub trait PreferenceStorage: Send + Sync {
    /// Read `key`, `Ok(None)` if it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage, one file per key
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Open storage in the platform data directory
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new() -> Result<Self> {
        let data_dir = dirs::data_local_dir()
            .ok_or(CoreError::NoDataDir)?
            .join("bakeoff");
        Self::at(data_dir)
    }

    /// Open storage rooted at `data_dir`
    pub fn at(data_dir: impl Into<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.into();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(key)
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }
}

/// In-process storage
///
/// Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| CoreError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| CoreError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the user's term override
pub struct SemesterPreferenceStore {
    storage: Option<Box<dyn PreferenceStorage>>,
}

impl SemesterPreferenceStore {
    /// Store backed by `storage`
    pub fn new(storage: impl PreferenceStorage + 'static) -> Self {
        Self {
            storage: Some(Box::new(storage)),
        }
    }

    /// Store with no storage context
    ///
    /// Reads return the computed current term and writes are ignored.
    pub fn detached() -> Self {
        Self { storage: None }
    }

    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    /// Active term code
    ///
    /// The stored override if there is a non-empty one, otherwise the term
    /// for today. Never fails: read errors count as "nothing stored".
    pub fn active_term_code(&self) -> String {
        let Some(storage) = &self.storage else {
            return current_term_code_now().to_string();
        };

        match storage.get(STORAGE_KEY) {
            Ok(Some(code)) if !code.is_empty() => code,
            Ok(_) => current_term_code_now().to_string(),
            Err(e) => {
                warn!("Failed to read stored semester: {}", e);
                current_term_code_now().to_string()
            }
        }
    }

    /// Store `code` as the active term
    ///
    /// `code` is written as given; callers pass values from
    /// [`crate::calendar::enumerate_term_options`]. No-op without storage.
    pub fn set_active_term_code(&self, code: &str) {
        let Some(storage) = &self.storage else {
            debug!("No storage context, ignoring semester selection");
            return;
        };

        match storage.set(STORAGE_KEY, code) {
            Ok(()) => debug!("Stored semester {}", code),
            Err(e) => warn!("Failed to store semester {}: {}", code, e),
        }
    }
}
