//! Filesystem-backed storage
//!
//! Stores one file per key under a configurable root directory. This is the
//! default durable medium for desktop and embedded-Linux hosts.

use super::StorageBackend;
use crate::error::{StoreError, StoreResult};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File-per-key storage backend rooted at a configurable directory
///
/// Keys are used verbatim as file names under the root; they are produced by
/// the repository engine from table/field names and decimal identifiers, so
/// no path sanitization is performed here.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `root`, creating the directory if needed
    pub fn new(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .map_err(|e| StoreError::RootUnavailable(format!("{}: {}", root.display(), e)))?;
        Ok(Self { root })
    }

    /// Root directory this backend writes under
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl StorageBackend for FileBackend {
    fn create(&self, key: &str, payload: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        debug!(key, bytes = payload.len(), "file backend write");
        fs::write(&path, payload).map_err(|e| StoreError::BackendWriteFailed {
            key: key.to_string(),
            reason: e.to_string(),
        })
    }

    fn read(&self, key: &str) -> StoreResult<String> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(contents),
            // Absent or unreadable keys read as empty per the backend contract
            Err(_) => Ok(String::new()),
        }
    }

    fn update(&self, key: &str, payload: &str) -> StoreResult<()> {
        self.create(key, payload)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        debug!(key, "file backend delete");
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::BackendDeleteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn append(&self, key: &str, payload: &str) -> StoreResult<()> {
        let path = self.path_for(key);
        debug!(key, bytes = payload.len(), "file backend append");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| StoreError::BackendWriteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        file.write_all(payload.as_bytes())
            .map_err(|e| StoreError::BackendWriteFailed {
                key: key.to_string(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn backend() -> (TempDir, FileBackend) {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path()).unwrap();
        (dir, backend)
    }

    #[test]
    fn test_create_and_read() {
        let (_dir, backend) = backend();

        backend.create("Sensor_id_1", "payload").unwrap();
        assert_eq!(backend.read("Sensor_id_1").unwrap(), "payload");
    }

    #[test]
    fn test_read_absent_key_is_empty() {
        let (_dir, backend) = backend();
        assert_eq!(backend.read("nope").unwrap(), "");
    }

    #[test]
    fn test_create_overwrites() {
        let (_dir, backend) = backend();

        backend.create("k", "old").unwrap();
        backend.create("k", "new").unwrap();
        assert_eq!(backend.read("k").unwrap(), "new");
    }

    #[test]
    fn test_update_equals_create() {
        let (_dir, backend) = backend();

        backend.update("k", "first").unwrap();
        assert_eq!(backend.read("k").unwrap(), "first");
        backend.update("k", "second").unwrap();
        assert_eq!(backend.read("k").unwrap(), "second");
    }

    #[test]
    fn test_delete_absent_key_is_ok() {
        let (_dir, backend) = backend();
        backend.delete("never_existed").unwrap();
    }

    #[test]
    fn test_delete_removes_key() {
        let (_dir, backend) = backend();

        backend.create("k", "v").unwrap();
        backend.delete("k").unwrap();
        assert_eq!(backend.read("k").unwrap(), "");
    }

    #[test]
    fn test_append_creates_then_concatenates() {
        let (_dir, backend) = backend();

        backend.append("log", "1\n").unwrap();
        backend.append("log", "2\n").unwrap();
        assert_eq!(backend.read("log").unwrap(), "1\n2\n");
    }

    #[test]
    fn test_root_created_on_construction() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let backend = FileBackend::new(&nested).unwrap();
        assert!(nested.is_dir());
        assert_eq!(backend.root(), nested.as_path());
    }
}
