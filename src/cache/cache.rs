// Memoization boundary for expensive corpus artifacts.
// Stores deal in opaque bytes; typing happens in read_or_compute.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid artifact key: {0:?}")]
    InvalidKey(String),
    #[error("Artifact store lock poisoned")]
    LockPoisoned,
}

pub trait ArtifactStore {
    /// Cached bytes for `key`, or `None` if nothing has been stored.
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;

    /// Drop every stored artifact.
    fn purge(&self) -> Result<(), StoreError>;
}

/// Return the cached value for `key`, or run `compute` and store its result.
///
/// Nothing is written when `compute` fails, so a partial artifact is never
/// persisted.
pub fn read_or_compute<S, T, E, F>(store: &S, key: &str, compute: F) -> Result<T, E>
where
    S: ArtifactStore + ?Sized,
    T: Serialize + DeserializeOwned,
    E: From<StoreError>,
    F: FnOnce() -> Result<T, E>,
{
    if let Some(bytes) = store.read(key)? {
        debug!(key, bytes = bytes.len(), "artifact cache hit");
        let value = serde_json::from_slice(&bytes).map_err(StoreError::from)?;
        return Ok(value);
    }

    debug!(key, "artifact cache miss");
    let value = compute()?;
    let bytes = serde_json::to_vec(&value).map_err(StoreError::from)?;
    store.write(key, &bytes)?;

    Ok(value)
}

/// Process-local store, mostly useful for tests and short-lived tools.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .read()
            .map(|entries| entries.contains_key(key))
            .unwrap_or(false)
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let entries = self.entries.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn purge(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.write().map_err(|_| StoreError::LockPoisoned)?;
        entries.clear();
        Ok(())
    }
}
