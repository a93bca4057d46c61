//! Repository factory for creating backends and repositories
//!
//! Centralizes backend construction so the host application picks the storage
//! medium in exactly one place; the repository engine never knows which
//! backend is active.

use super::engine::Repository;
use crate::config::{BackendKind, StoreConfig};
use crate::entity::Entity;
use crate::error::StoreResult;
use crate::storage::{FileBackend, MemoryBackend, StorageBackend};
use std::path::PathBuf;
use std::sync::Arc;

/// Factory for storage backends and repositories
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a file backend rooted at `root`
    ///
    /// # Arguments
    /// * `root` - Directory records are stored under (created if missing)
    pub fn create_file_backend(root: impl Into<PathBuf>) -> StoreResult<Arc<dyn StorageBackend>> {
        Ok(Arc::new(FileBackend::new(root)?))
    }

    /// Create a volatile in-memory backend
    pub fn create_memory_backend() -> Arc<dyn StorageBackend> {
        Arc::new(MemoryBackend::new())
    }

    /// Create the backend described by `config`
    pub fn from_config(config: &StoreConfig) -> StoreResult<Arc<dyn StorageBackend>> {
        match config.backend {
            BackendKind::File => Self::create_file_backend(config.root.clone()),
            BackendKind::Memory => Ok(Self::create_memory_backend()),
        }
    }

    /// Create a repository for `E` on an existing backend
    ///
    /// Repositories for different entity types may share one backend; each
    /// maintains its own table's index.
    pub fn create_repository<E: Entity>(backend: Arc<dyn StorageBackend>) -> Repository<E> {
        Repository::new(backend)
    }

    /// Create a repository for `E` with the backend described by `config`
    pub fn repository_from_config<E: Entity>(config: &StoreConfig) -> StoreResult<Repository<E>> {
        Ok(Repository::new(Self::from_config(config)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoreError;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    struct Note {
        id: Option<u64>,
        body: String,
    }

    impl Entity for Note {
        type Id = u64;

        fn table_name() -> &'static str {
            "Note"
        }

        fn primary_key_name() -> &'static str {
            "id"
        }

        fn id(&self) -> Option<u64> {
            self.id
        }

        fn to_payload(&self) -> StoreResult<String> {
            serde_json::to_string(self).map_err(|e| StoreError::SerializeFailed(e.to_string()))
        }

        fn from_payload(payload: &str) -> StoreResult<Self> {
            serde_json::from_str(payload).map_err(|e| StoreError::DeserializeFailed(e.to_string()))
        }
    }

    #[test]
    fn test_factory_creates_memory_backend() {
        let backend = RepositoryFactory::create_memory_backend();
        backend.create("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap(), "v");
    }

    #[test]
    fn test_factory_creates_file_backend() {
        let dir = TempDir::new().unwrap();
        let backend = RepositoryFactory::create_file_backend(dir.path()).unwrap();
        backend.create("k", "v").unwrap();
        assert_eq!(backend.read("k").unwrap(), "v");
    }

    #[test]
    fn test_from_config_selects_backend() {
        let dir = TempDir::new().unwrap();

        let file_config = StoreConfig {
            root: dir.path().to_path_buf(),
            backend: BackendKind::File,
        };
        let file_backend = RepositoryFactory::from_config(&file_config).unwrap();
        file_backend.create("k", "on disk").unwrap();
        assert!(dir.path().join("k").is_file());

        let memory_config = StoreConfig {
            root: dir.path().to_path_buf(),
            backend: BackendKind::Memory,
        };
        let memory_backend = RepositoryFactory::from_config(&memory_config).unwrap();
        memory_backend.create("k", "in memory").unwrap();
        // Memory backend never touches the configured root
        assert_eq!(
            std::fs::read_to_string(dir.path().join("k")).unwrap(),
            "on disk"
        );
    }

    #[test]
    fn test_repositories_share_one_backend() {
        let backend = RepositoryFactory::create_memory_backend();
        let repo = RepositoryFactory::create_repository::<Note>(backend.clone());

        repo.save(Note {
            id: Some(1),
            body: "hello".to_string(),
        })
        .unwrap();

        assert_eq!(backend.read("Note_IDs").unwrap(), "1\n");
        assert!(!backend.read("Note_id_1").unwrap().is_empty());
    }

    #[test]
    fn test_repository_from_config() {
        let config = StoreConfig {
            root: PathBuf::from("ignored"),
            backend: BackendKind::Memory,
        };
        let repo = RepositoryFactory::repository_from_config::<Note>(&config).unwrap();

        repo.save(Note {
            id: Some(2),
            body: "configured".to_string(),
        })
        .unwrap();
        assert!(repo.exists_by_id(&2).unwrap());
    }
}
