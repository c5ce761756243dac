use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use super::{is_valid_key, BlobStore, StoreError};

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go to a temp file that is renamed over the target while an
/// exclusive lock on `<key>.lock` is held, so a concurrent reader sees either
/// the old blob or the new one.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default data directory: `~/.local/share/locsearch` on Linux, or the
    /// platform equivalent via `dirs::data_dir()`. Falls back to the current
    /// directory if no data dir is available.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("locsearch")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the blob file for `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        if !is_valid_key(key) {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    fn lock(&self, key: &str) -> std::io::Result<File> {
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.dir.join(format!("{key}.lock")))?;
        FileExt::lock_exclusive(&lock_file)?;
        Ok(lock_file)
    }
}

impl BlobStore for FileBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::ReadError {
                key: key.to_string(),
                path,
                source: e,
            }),
        }
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let write_error = |source| StoreError::WriteError {
            key: key.to_string(),
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_error)?;
        // Released when dropped at the end of this scope.
        let _guard = self.lock(key).map_err(write_error)?;

        let tmp = path.with_extension("json.tmp");
        let mut file = File::create(&tmp).map_err(write_error)?;
        file.write_all(blob.as_bytes()).map_err(write_error)?;
        file.sync_all().map_err(write_error)?;
        drop(file);

        fs::rename(&tmp, &path).map_err(write_error)?;
        tracing::trace!(key = %key, path = %path.display(), bytes = blob.len(), "Blob written");
        Ok(())
    }
}
