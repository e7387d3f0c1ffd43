//! Typed JSON persistence over a [`KeyValueStore`].
//!
//! Loads never fail outright: a missing key and an undecodable value both
//! come back as absence, and the caller falls back to defaults. Store-level
//! read errors are reported separately so the tracker can decide whether to
//! keep using the store.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::store::KeyValueStore;
use crate::error::StorageError;

/// What a typed load produced.
#[derive(Debug)]
pub enum LoadOutcome<T> {
    /// Value present and decoded.
    Loaded(T),
    /// Nothing stored under the key.
    Missing,
    /// Something was stored but it did not decode as `T`.
    Malformed(serde_json::Error),
    /// The store itself could not be read.
    Unavailable(StorageError),
}

impl<T> LoadOutcome<T> {
    /// Collapse to the decoded value, treating every failure as absence.
    pub fn value(self) -> Option<T> {
        match self {
            LoadOutcome::Loaded(v) => Some(v),
            _ => None,
        }
    }
}

/// Reads and writes named JSON blobs.
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Load and decode the value under `key`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> LoadOutcome<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return LoadOutcome::Missing,
            Err(e) => {
                tracing::warn!(key, error = %e, "store read failed");
                return LoadOutcome::Unavailable(e);
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                tracing::debug!(key, "loaded record");
                LoadOutcome::Loaded(value)
            }
            Err(e) => {
                tracing::warn!(key, error = %e, "stored record is malformed, ignoring it");
                LoadOutcome::Malformed(e)
            }
        }
    }

    /// Load the value under `key`, or `T::default()` when it is missing or
    /// unreadable.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load(key).value().unwrap_or_default()
    }

    /// Encode `value` and overwrite whatever is stored under `key`.
    ///
    /// # Errors
    /// Returns an error if encoding fails or the store rejects the write.
    pub fn save<T: Serialize + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let raw = encode(key, value)?;
        self.store.set(key, &raw)?;
        tracing::debug!(key, bytes = raw.len(), "saved record");
        Ok(())
    }

    /// Write already-encoded records in one batch.
    ///
    /// # Errors
    /// Returns an error if the store rejects the batch.
    pub fn save_all(&mut self, records: &[(&str, String)]) -> Result<(), StorageError> {
        self.store.set_all(records)?;
        tracing::debug!(records = records.len(), "saved batch");
        Ok(())
    }
}

/// Encode `value` as the JSON document stored under `key`.
///
/// # Errors
/// Returns [`StorageError::Encode`] if serialization fails.
pub fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|source| StorageError::Encode {
        key: key.to_string(),
        source,
    })
}
