use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;

/// Flat string key-value namespace backing the record mirrors and the
/// autosave drafts. `set` may fail with `QuotaExceeded` when the medium is
/// out of space, or `Storage` when it is unavailable altogether.
pub trait StorageMedium {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
    fn keys(&self) -> AppResult<Vec<String>>;
    fn is_available(&self) -> bool;
}

/// File-backed medium: the whole namespace lives in one JSON object file,
/// rewritten on every mutation. Last writer wins across processes; there is
/// no locking.
pub struct FileMedium {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileMedium {
    /// Open the store file, creating an empty namespace when it does not
    /// exist yet. A malformed file is replaced by an empty namespace with a
    /// warning rather than an error.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(map) => map,
                Err(e) => {
                    warning(format!(
                        "Store file {} is malformed ({}); starting empty",
                        path.display(),
                        e
                    ));
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        Self { path, entries }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json).map_err(|e| match e.kind() {
            ErrorKind::StorageFull | ErrorKind::QuotaExceeded => AppError::QuotaExceeded,
            _ => AppError::Storage(e.to_string()),
        })
    }
}

impl StorageMedium for FileMedium {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            // Keep the in-memory view aligned with what is actually on disk.
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn is_available(&self) -> bool {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                parent.exists() || fs::create_dir_all(parent).is_ok()
            }
            _ => true,
        }
    }
}

/// In-memory medium for tests, with injectable failure modes.
#[derive(Default)]
pub struct MemoryMedium {
    entries: BTreeMap<String, String>,
    /// When true, every `set` fails with a Storage error.
    pub fail_writes: bool,
    /// Total byte budget across all values; exceeding it fails with
    /// QuotaExceeded, mimicking a full medium.
    pub quota: Option<usize>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    fn used_bytes(&self) -> usize {
        self.entries.values().map(|v| v.len()).sum()
    }
}

impl StorageMedium for MemoryMedium {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Storage("write disabled".into()));
        }
        if let Some(limit) = self.quota {
            let existing = self.entries.get(key).map(|v| v.len()).unwrap_or(0);
            if self.used_bytes() - existing + value.len() > limit {
                return Err(AppError::QuotaExceeded);
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.entries.keys().cloned().collect())
    }

    fn is_available(&self) -> bool {
        !self.fail_writes
    }
}
