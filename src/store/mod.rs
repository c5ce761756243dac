//! Opaque blob persistence.
//!
//! The recent list never talks to a storage technology directly; it reads and
//! writes whole blobs under a named key through [`BlobStore`].

mod deferred;
mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use deferred::DeferredBlobStore;
pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;

/// Errors that can occur while reading or writing a blob.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read blob '{key}' from '{path}': {source}")]
    ReadError {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write blob '{key}' to '{path}': {source}")]
    WriteError {
        key: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid blob key '{key}'")]
    InvalidKey { key: String },

    #[error("Background write of blob '{key}' failed: {message}")]
    DeferredWriteFailed { key: String, message: String },

    #[error("Blob writer has shut down")]
    WriterClosed,
}

/// Whole-blob key/value persistence.
///
/// `save` always overwrites the previous blob for the key; there is no
/// append or partial update.
pub trait BlobStore: Send + Sync {
    /// Read the blob stored under `key`, or `None` if nothing was ever saved.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the blob stored under `key`.
    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError>;

    /// Wait until every earlier `save` has reached durable storage.
    ///
    /// Stores that write synchronously have nothing to wait for.
    fn flush(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Keys double as file stems, so they are restricted to a portable set:
/// ASCII alphanumerics, `_`, `-` and `.`, not starting with a dot.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
