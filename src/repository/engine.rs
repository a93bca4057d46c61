//! Generic repository engine
//!
//! Orchestrates the storage backend and the identifier index to provide
//! typed create/read/update/delete over entities. The engine is the sole
//! writer of record payloads and the sole maintainer of the index; the
//! backend stays a dumb key/payload store.

use crate::entity::Entity;
use crate::error::StoreResult;
use crate::index::IndexManager;
use crate::storage::StorageBackend;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Generic repository over one entity type and one storage backend
///
/// Invariant maintained across all write operations: the index lists exactly
/// the identifiers for which a non-empty record payload exists — no
/// duplicates, no stale entries, no missing entries.
///
/// Record payloads live at `"{TableName}_{PrimaryKeyName}_{ID}"`; the index
/// lives at `"{TableName}_IDs"`. Write operations called on an entity with no
/// primary key are no-ops that hand the entity back unchanged; callers that
/// need to detect this check the returned entity's key themselves.
pub struct Repository<E: Entity> {
    backend: Arc<dyn StorageBackend>,
    index: IndexManager<E::Id>,
    // Held across every index read-modify-write so concurrent saves on the
    // same table cannot lose an append
    index_lock: Mutex<()>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Repository<E> {
    /// Create a repository for `E` on the given backend
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        let index = IndexManager::new(backend.clone(), E::table_name());
        Self {
            backend,
            index,
            index_lock: Mutex::new(()),
            _entity: PhantomData,
        }
    }

    /// Key of the record payload for `id`
    fn record_key(id: &E::Id) -> String {
        format!("{}_{}_{}", E::table_name(), E::primary_key_name(), id)
    }

    /// Persist `entity`, registering its identifier in the index
    ///
    /// Overwrites any existing payload at the record key. The identifier is
    /// appended to the index only if not already present. An entity without a
    /// primary key is returned unchanged with no backend write.
    pub fn save(&self, entity: E) -> StoreResult<E> {
        let Some(id) = entity.id() else {
            debug!(table = E::table_name(), "save skipped, no primary key set");
            return Ok(entity);
        };

        let key = Self::record_key(&id);
        let payload = entity.to_payload()?;
        debug!(table = E::table_name(), key = %key, "save");
        self.backend.create(&key, &payload)?;

        let _guard = self.index_lock.lock()?;
        if !self.index.exists(&id)? {
            self.index.append(&id)?;
        }
        Ok(entity)
    }

    /// Load the entity stored under `id`, if any
    ///
    /// An empty payload is the sole not-found signal; an entity whose
    /// serialized form is legitimately empty is indistinguishable from an
    /// absent one.
    pub fn find_by_id(&self, id: &E::Id) -> StoreResult<Option<E>> {
        let payload = self.backend.read(&Self::record_key(id))?;
        if payload.is_empty() {
            return Ok(None);
        }
        E::from_payload(&payload).map(Some)
    }

    /// Load every stored entity, in index order
    ///
    /// Index order is the order identifiers first appeared (deletions compact
    /// the index by omission). Identifiers whose payload reads back empty are
    /// skipped.
    pub fn find_all(&self) -> StoreResult<Vec<E>> {
        let ids = self.index.read_all()?;
        let mut entities = Vec::with_capacity(ids.len());
        for id in &ids {
            let payload = self.backend.read(&Self::record_key(id))?;
            if payload.is_empty() {
                warn!(
                    table = E::table_name(),
                    id = %id,
                    "indexed identifier has no payload, skipping"
                );
                continue;
            }
            entities.push(E::from_payload(&payload)?);
        }
        Ok(entities)
    }

    /// Overwrite the payload for `entity`, creating the row if it never was
    /// saved
    ///
    /// Mirrors [`Repository::save`]: no-op without a primary key, and an
    /// identifier not yet in the index is appended — an update of a
    /// never-saved entity creates it.
    pub fn update(&self, entity: E) -> StoreResult<E> {
        let Some(id) = entity.id() else {
            debug!(table = E::table_name(), "update skipped, no primary key set");
            return Ok(entity);
        };

        let key = Self::record_key(&id);
        let payload = entity.to_payload()?;
        debug!(table = E::table_name(), key = %key, "update");
        self.backend.update(&key, &payload)?;

        let _guard = self.index_lock.lock()?;
        if !self.index.exists(&id)? {
            self.index.append(&id)?;
        }
        Ok(entity)
    }

    /// Delete the record stored under `id` and deregister it from the index
    ///
    /// Deleting an absent identifier is not an error. The index is rewritten
    /// wholesale with `id` filtered out.
    pub fn delete_by_id(&self, id: &E::Id) -> StoreResult<()> {
        debug!(table = E::table_name(), id = %id, "delete");
        self.backend.delete(&Self::record_key(id))?;

        let _guard = self.index_lock.lock()?;
        let mut ids = self.index.read_all()?;
        ids.retain(|known| known != id);
        self.index.write_all(&ids)
    }

    /// Delete `entity` by its primary key; no-op if the key is absent
    pub fn delete(&self, entity: &E) -> StoreResult<()> {
        match entity.id() {
            Some(id) => self.delete_by_id(&id),
            None => Ok(()),
        }
    }

    /// True if a non-empty payload exists for `id`
    ///
    /// The payload is authoritative; the index is never consulted here.
    pub fn exists_by_id(&self, id: &E::Id) -> StoreResult<bool> {
        Ok(!self.backend.read(&Self::record_key(id))?.is_empty())
    }
}
