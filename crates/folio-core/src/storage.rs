//! Persistent preferences using redb.
//!
//! A single string-to-string table. The page only stores the theme, but the
//! store is keyed so other preferences can share the file.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::FolioError;

const PREFERENCES_TABLE: TableDefinition<&str, &str> = TableDefinition::new("preferences");

/// File name of the preferences database inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.redb";

/// Key-value persistence for user preferences.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError>;
    fn set(&self, key: &str, value: &str) -> Result<(), FolioError>;
}

/// Preference store backed by a redb file.
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Open (or create) the preferences database at `path`.
    ///
    /// Creates the parent directory when needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, FolioError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open the preferences database inside `data_dir`.
    pub fn in_data_dir(data_dir: impl AsRef<Path>) -> Result<Self, FolioError> {
        Self::new(data_dir.as_ref().join(PREFERENCES_FILE))
    }
}

impl PreferenceStore for Storage {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// In-memory preference store, used when the database cannot be opened.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::in_data_dir(temp_dir.path()).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_missing_key_is_none() {
        let (storage, _dir) = create_test_storage();
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let (storage, _dir) = create_test_storage();
        storage.set("theme", "dark").unwrap();
        storage.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        {
            let storage = Storage::in_data_dir(temp_dir.path()).unwrap();
            storage.set("theme", "dark").unwrap();
        }
        let storage = Storage::in_data_dir(temp_dir.path()).unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_creates_missing_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let storage = Storage::in_data_dir(&nested).unwrap();
        storage.set("theme", "dark").unwrap();
        assert!(nested.join(PREFERENCES_FILE).exists());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }
}
