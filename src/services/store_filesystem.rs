use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::KeyValueStore;

/// File name of the store inside the data directory.
pub const STORE_FILE: &str = "store.json";

const TEMP_SUFFIX: &str = ".tmp";
const BACKUP_SUFFIX: &str = ".bak";

/// Filesystem-backed key-value store.
///
/// All slots live in one JSON object. Every write replaces the file before returning.
/// A file that fails to parse is moved to `store.json.bak` and the store starts empty.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Create a store backed by the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a store at `<data_dir>/store.json`.
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(data_dir.join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        match serde_json::from_str(&content) {
            Ok(slots) => Ok(slots),
            Err(err) => {
                let backup = self.sibling(BACKUP_SUFFIX);
                tracing::warn!(
                    path = %self.path.display(),
                    backup = %backup.display(),
                    error = %err,
                    "store file is malformed; moving it aside and starting empty"
                );
                fs::rename(&self.path, &backup)?;
                Ok(BTreeMap::new())
            }
        }
    }

    /// Replace the file atomically: write a sibling temp file, then rename it over the store.
    fn write_all(&self, slots: &BTreeMap<String, String>) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(slots)?;
        let tmp = self.sibling(TEMP_SUFFIX);
        {
            let mut file = owner_only_options().open(&tmp)?;
            file.write_all(format!("{}\n", content).as_bytes())?;
            file.sync_all()?;
        }
        restrict_permissions(&tmp)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    }
}

// The store holds the API key, so it is readable by the owner only.
#[cfg(unix)]
fn owner_only_options() -> OpenOptions {
    use std::os::unix::fs::OpenOptionsExt;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true).mode(0o600);
    options
}

#[cfg(not(unix))]
fn owner_only_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    options
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> Result<(), AppError> {
    use std::os::unix::fs::PermissionsExt;

    // mode() only applies on creation; a leftover temp file keeps its old bits
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> Result<(), AppError> {
    Ok(())
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AppError> {
        let mut slots = self.read_all()?;
        slots.insert(key.to_string(), value.to_string());
        self.write_all(&slots)?;
        tracing::debug!(key, bytes = value.len(), "store slot written");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AppError> {
        let mut slots = self.read_all()?;
        if slots.remove(key).is_some() {
            self.write_all(&slots)?;
            tracing::debug!(key, "store slot removed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());
        assert_eq!(store.get("studentListRaw").unwrap(), None);
    }

    #[test]
    fn values_survive_a_new_store_instance() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a/b");
        FileKeyValueStore::in_dir(&nested).set("apiCredential", "k").unwrap();

        let reopened = FileKeyValueStore::in_dir(&nested);
        assert_eq!(reopened.get("apiCredential").unwrap().as_deref(), Some("k"));
    }

    #[test]
    fn remove_deletes_only_the_named_slot() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        store.remove("a").unwrap();
        store.remove("never-set").unwrap();

        assert_eq!(store.get("a").unwrap(), None);
        assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
    }

    #[test]
    fn malformed_file_is_moved_aside_and_store_keeps_working() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());
        fs::write(store.path(), "{not json").unwrap();

        assert_eq!(store.get("studentListRaw").unwrap(), None);
        let backup = dir.path().join("store.json.bak");
        assert_eq!(fs::read_to_string(&backup).unwrap(), "{not json");

        store.set("apiCredential", "k").unwrap();
        assert_eq!(store.get("apiCredential").unwrap().as_deref(), Some("k"));
    }

    #[test]
    fn writes_leave_no_temp_file_behind() {
        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();

        assert!(!dir.path().join("store.json.tmp").exists());
        let saved: BTreeMap<String, String> =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(saved.len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn store_file_is_private_to_the_owner() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::in_dir(dir.path());
        fs::write(store.path(), "{}").unwrap();
        fs::set_permissions(store.path(), fs::Permissions::from_mode(0o644)).unwrap();

        store.set("apiCredential", "AIza-secret").unwrap();
        let mode = fs::metadata(store.path()).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
