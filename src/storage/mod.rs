//! Storage backend abstraction
//!
//! The repository engine never touches files or keys directly; every record
//! payload and the identifier index go through the five-verb contract defined
//! here. Backends are dumb key/payload stores with no knowledge of entities.
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          StorageBackend trait           │
//! │   (create / read / update / delete /    │
//! │               append)                   │
//! └──────────────┬──────────────────────────┘
//!                │
//!        ┌───────┴────────┐
//!        │                │
//! ┌──────▼──────┐  ┌──────▼──────┐
//! │ FileBackend │  │MemoryBackend│
//! │             │  │             │
//! │- one file   │  │- HashMap    │
//! │  per key    │  │  key/value  │
//! │- durable    │  │  area       │
//! └─────────────┘  └─────────────┘
//! ```

pub mod file;
pub mod memory;

use crate::error::StoreResult;

/// Capability contract for pluggable storage backends
///
/// Keys and payloads are opaque strings. Notable contract points:
///
/// - `read` has no distinct not-found signal: an absent or unreadable key
///   yields an empty string. Callers treat emptiness as "no value".
/// - `update` has overwrite semantics equivalent to `create`; both verbs are
///   kept because some media distinguish them.
/// - `delete` of an absent key is not an error.
/// - `append` concatenates onto existing content, creating the key if absent.
pub trait StorageBackend: Send + Sync {
    /// Write `payload` at `key`, overwriting any existing content
    fn create(&self, key: &str, payload: &str) -> StoreResult<()>;

    /// Read the payload at `key`; empty string if absent or unreadable
    fn read(&self, key: &str) -> StoreResult<String>;

    /// Overwrite the payload at `key` (same semantics as `create`)
    fn update(&self, key: &str, payload: &str) -> StoreResult<()>;

    /// Remove the payload at `key`; removing an absent key succeeds
    fn delete(&self, key: &str) -> StoreResult<()>;

    /// Concatenate `payload` onto the content at `key`, creating it if absent
    fn append(&self, key: &str, payload: &str) -> StoreResult<()>;
}

// Re-export main types
pub use file::FileBackend;
pub use memory::MemoryBackend;
