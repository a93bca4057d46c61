//! In-memory key/value storage
//!
//! Mirrors the managed key/value areas found on constrained devices (e.g. a
//! flash-backed preferences region), with the contents held in a `HashMap`.
//! Also the backend of choice for unit tests.

use super::StorageBackend;
use crate::error::StoreResult;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// Volatile key/value backend
///
/// All five verbs operate on a mutex-guarded map; contents are lost when the
/// backend is dropped.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// True if no keys are stored
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StorageBackend for MemoryBackend {
    fn create(&self, key: &str, payload: &str) -> StoreResult<()> {
        debug!(key, bytes = payload.len(), "memory backend write");
        self.entries
            .lock()?
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn read(&self, key: &str) -> StoreResult<String> {
        Ok(self.entries.lock()?.get(key).cloned().unwrap_or_default())
    }

    fn update(&self, key: &str, payload: &str) -> StoreResult<()> {
        self.create(key, payload)
    }

    fn delete(&self, key: &str) -> StoreResult<()> {
        debug!(key, "memory backend delete");
        self.entries.lock()?.remove(key);
        Ok(())
    }

    fn append(&self, key: &str, payload: &str) -> StoreResult<()> {
        debug!(key, bytes = payload.len(), "memory backend append");
        let mut entries = self.entries.lock()?;
        entries.entry(key.to_string()).or_default().push_str(payload);
        Ok(())
    }
}
