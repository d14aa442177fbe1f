use crate::domain::AppError;
use crate::ports::KeyValueStore;
use crate::services::{FileKeyValueStore, MemoryKeyValueStore};

/// Store selected at startup: the data-directory file, or memory for `--ephemeral`.
#[derive(Debug, Clone)]
pub enum ProfileStore {
    File(FileKeyValueStore),
    Memory(MemoryKeyValueStore),
}

impl KeyValueStore for ProfileStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        match self {
            ProfileStore::File(store) => store.get(key),
            ProfileStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        match self {
            ProfileStore::File(store) => store.set(key, value),
            ProfileStore::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        match self {
            ProfileStore::File(store) => store.remove(key),
            ProfileStore::Memory(store) => store.remove(key),
        }
    }
}
