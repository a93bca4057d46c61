//! flatstore: flat-file entity repository with pluggable storage backends
//!
//! Stores typed records through a five-verb key/payload backend contract,
//! with an auxiliary per-table index payload tracking which identifiers
//! exist. Aimed at small embedded or desktop applications that need simple
//! durable storage without a database engine.
//!
//! # Layout on the backend
//!
//! - record payload at `"{TableName}_{PrimaryKeyName}_{ID}"`
//! - identifier index at `"{TableName}_IDs"`, one decimal id per line
//!
//! # Example
//!
//! ```no_run
//! use flatstore::{Entity, RepositoryFactory, StoreError, StoreResult};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct User {
//!     id: Option<u32>,
//!     name: String,
//! }
//!
//! impl Entity for User {
//!     type Id = u32;
//!
//!     fn table_name() -> &'static str {
//!         "User"
//!     }
//!
//!     fn primary_key_name() -> &'static str {
//!         "id"
//!     }
//!
//!     fn id(&self) -> Option<u32> {
//!         self.id
//!     }
//!
//!     fn to_payload(&self) -> StoreResult<String> {
//!         serde_json::to_string(self).map_err(|e| StoreError::SerializeFailed(e.to_string()))
//!     }
//!
//!     fn from_payload(payload: &str) -> StoreResult<Self> {
//!         serde_json::from_str(payload).map_err(|e| StoreError::DeserializeFailed(e.to_string()))
//!     }
//! }
//!
//! fn main() -> StoreResult<()> {
//!     let backend = RepositoryFactory::create_file_backend("./data")?;
//!     let users = RepositoryFactory::create_repository::<User>(backend);
//!
//!     users.save(User { id: Some(1), name: "ada".into() })?;
//!     let ada = users.find_by_id(&1)?;
//!     assert!(ada.is_some());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod entity;
pub mod error;
pub mod index;
pub mod repository;
pub mod storage;

// Re-export main types
pub use config::{BackendKind, StoreConfig};
pub use entity::{Entity, EntityId};
pub use error::{StoreError, StoreResult};
pub use index::IndexManager;
pub use repository::{Repository, RepositoryFactory};
pub use storage::{FileBackend, MemoryBackend, StorageBackend};
