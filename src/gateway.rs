// 🚪 Persistence Gateway
// The whole entry list lives as one JSON array under one fixed key

use crate::db::KeyValueStore;
use crate::entry::Entry;
use crate::error::StorageError;

/// Fixed storage key. No version envelope is written around the array.
pub const STORAGE_KEY: &str = "@valores";

pub struct PersistenceGateway<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> PersistenceGateway<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// All stored entries in insertion order; a missing key is an empty list.
    pub fn load(&self) -> Result<Vec<Entry>, StorageError> {
        let raw = self.store.get(&self.key).map_err(|e| StorageError::Read {
            key: self.key.clone(),
            source: e.into(),
        })?;

        match raw {
            None => Ok(Vec::new()),
            Some(json) => serde_json::from_str(&json).map_err(|e| StorageError::Serialization {
                key: self.key.clone(),
                source: e,
            }),
        }
    }

    /// Replace the stored list with `entries`.
    pub fn save(&mut self, entries: &[Entry]) -> Result<(), StorageError> {
        let json = serde_json::to_string(entries).map_err(|e| StorageError::Serialization {
            key: self.key.clone(),
            source: e,
        })?;

        self.store
            .set(&self.key, &json)
            .map_err(|e| StorageError::Write {
                key: self.key.clone(),
                source: e.into(),
            })
    }
}
