use std::collections::HashMap;

use parking_lot::Mutex;

use super::{BlobStore, StoreError};

/// In-process blob store. Nothing survives the process, but everything
/// survives a manager being dropped and reopened over the same store.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    blobs: HashMap<String, String>,
    writes: usize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one blob. Seeding does not count as a write.
    pub fn with_blob(key: &str, blob: &str) -> Self {
        let store = Self::new();
        store
            .inner
            .lock()
            .blobs
            .insert(key.to_string(), blob.to_string());
        store
    }

    /// Current blob for `key`, if any.
    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().blobs.get(key).cloned()
    }

    /// Number of successful `save` calls so far.
    pub fn write_count(&self) -> usize {
        self.inner.lock().writes
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get(key))
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock();
        inner.blobs.insert(key.to_string(), blob.to_string());
        inner.writes += 1;
        Ok(())
    }
}
