//! Identifier index maintenance
//!
//! Each entity type has one index payload, keyed `"{TableName}_IDs"`, holding
//! one decimal identifier per line. The index is the repository's record of
//! which identifiers exist; the engine keeps it in step with the per-record
//! payloads on every write.
//!
//! Inserts append a single line; deletes rewrite the whole payload with the
//! removed identifier filtered out. The asymmetry is intentional: inserts are
//! the hot path, deletes are assumed rare.

use crate::entity::EntityId;
use crate::error::{StoreError, StoreResult};
use crate::storage::StorageBackend;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::warn;

/// Suffix appended to the table name to form the index key
const INDEX_KEY_SUFFIX: &str = "_IDs";

/// Maintains the line-delimited identifier list for one entity type
pub struct IndexManager<I> {
    backend: Arc<dyn StorageBackend>,
    index_key: String,
    _id: PhantomData<fn() -> I>,
}

impl<I: EntityId> IndexManager<I>
where
    <I as std::str::FromStr>::Err: std::fmt::Display,
{
    /// Create an index manager for `table` on the given backend
    pub fn new(backend: Arc<dyn StorageBackend>, table: &str) -> Self {
        Self {
            backend,
            index_key: format!("{}{}", table, INDEX_KEY_SUFFIX),
            _id: PhantomData,
        }
    }

    /// Key under which this index payload is stored
    pub fn index_key(&self) -> &str {
        &self.index_key
    }

    /// Read every identifier in the index, in order of appearance
    ///
    /// `\n` and `\r` are both treated as delimiters and empty tokens are
    /// skipped, so `\r\n` files and files missing their trailing newline
    /// parse the same. A token that fails decimal parsing fails the whole
    /// read with [`StoreError::IndexCorrupted`]; the payload is left intact
    /// for inspection.
    pub fn read_all(&self) -> StoreResult<Vec<I>> {
        let payload = self.backend.read(&self.index_key)?;
        if payload.is_empty() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for token in payload.split(['\n', '\r']).filter(|t| !t.is_empty()) {
            let id = token.parse::<I>().map_err(|_| StoreError::IndexCorrupted {
                index_key: self.index_key.clone(),
                token: token.to_string(),
            })?;
            ids.push(id);
        }
        Ok(ids)
    }

    /// Rewrite the full index: one identifier per line, every line terminated
    ///
    /// An empty sequence writes an empty payload. This is a single overwrite
    /// call; atomicity is whatever the backend provides for one write.
    pub fn write_all(&self, ids: &[I]) -> StoreResult<()> {
        let mut payload = String::new();
        for id in ids {
            payload.push_str(&id.to_string());
            payload.push('\n');
        }
        self.backend.update(&self.index_key, &payload)
    }

    /// Append one identifier as a new line
    ///
    /// Guards against concatenating onto a non-terminated final line: if the
    /// current payload does not end in a line terminator, one is prepended to
    /// the new entry so the previous last line is not corrupted.
    pub fn append(&self, id: &I) -> StoreResult<()> {
        let current = self.backend.read(&self.index_key)?;
        let entry = if current.is_empty() || current.ends_with(['\n', '\r']) {
            format!("{}\n", id)
        } else {
            warn!(
                index_key = %self.index_key,
                "index payload missing trailing newline, repairing on append"
            );
            format!("\n{}\n", id)
        };
        self.backend.append(&self.index_key, &entry)
    }

    /// True if `id` is present in the index
    pub fn exists(&self, id: &I) -> StoreResult<bool> {
        Ok(self.read_all()?.iter().any(|known| known == id))
    }
}
