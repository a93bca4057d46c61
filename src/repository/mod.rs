//! Repository engine
//!
//! Composes the storage backend and the identifier index into a typed
//! persistence interface for entities.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │             Repository<E>                │
//! │  save / find_by_id / find_all / update   │
//! │  delete_by_id / delete / exists_by_id    │
//! └──────┬──────────────────────────┬────────┘
//!        │                          │
//! ┌──────▼────────┐        ┌────────▼───────┐
//! │ IndexManager  │        │ StorageBackend │
//! │ {Table}_IDs   │        │ record payloads│
//! └──────┬────────┘        └────────────────┘
//!        │
//!   (same backend)
//! ```

pub mod engine;
pub mod factory;

// Re-export main types
pub use engine::Repository;
pub use factory::RepositoryFactory;
